use std::sync::Arc;

use crate::NameError;

/// A capability that produces one first name per call.
///
/// The Lambda handler only talks to this trait, so tests can swap the random
/// generator for a deterministic or failing stub.
pub trait NameSource {
    /// Produce the next first name.
    fn next_name(&self) -> Result<String, NameError>;
}

impl<T: NameSource + ?Sized> NameSource for &T {
    fn next_name(&self) -> Result<String, NameError> {
        (**self).next_name()
    }
}

impl<T: NameSource + ?Sized> NameSource for Box<T> {
    fn next_name(&self) -> Result<String, NameError> {
        (**self).next_name()
    }
}

impl<T: NameSource + ?Sized> NameSource for Arc<T> {
    fn next_name(&self) -> Result<String, NameError> {
        (**self).next_name()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::NameSource;
    use crate::NameError;

    struct Constant;

    impl NameSource for Constant {
        fn next_name(&self) -> Result<String, NameError> {
            Ok("Ada".to_string())
        }
    }

    #[test]
    fn smart_pointers_forward_to_the_inner_source() {
        let boxed: Box<dyn NameSource> = Box::new(Constant);
        assert_eq!(boxed.next_name().unwrap(), "Ada");

        let shared = Arc::new(Constant);
        assert_eq!(Arc::clone(&shared).next_name().unwrap(), "Ada");
        assert_eq!((&*shared).next_name().unwrap(), "Ada");
    }
}
