use std::sync::{Mutex, PoisonError};

use rand::{rngs::StdRng, seq::SliceRandom, Rng, SeedableRng};
use tracing::trace;

use crate::{table, Gender, NameError, NameSource};

/// Draw a single first name using the thread-local generator.
///
/// With `gender` set to `None`, either table is picked with equal probability
/// before the name itself is drawn by frequency.
pub fn first_name(gender: Option<Gender>) -> Result<String, NameError> {
    draw(&mut rand::thread_rng(), gender).map(str::to_string)
}

fn draw<R: Rng + ?Sized>(rng: &mut R, gender: Option<Gender>) -> Result<&'static str, NameError> {
    let gender = gender.unwrap_or_else(|| rng.gen());
    let entry = table::for_gender(gender).choose_weighted(rng, |entry| entry.1)?;
    trace!(%gender, name = entry.0, "drew first name");
    Ok(entry.0)
}

#[derive(Debug)]
enum Generator {
    Thread,
    Seeded(Mutex<StdRng>),
}

/// The default [`NameSource`]: frequency-weighted random first names.
#[derive(Debug)]
pub struct RandomFirstNames {
    gender: Option<Gender>,
    generator: Generator,
}

impl RandomFirstNames {
    /// A source backed by the thread-local generator.
    pub fn new(gender: Option<Gender>) -> Self {
        Self {
            gender,
            generator: Generator::Thread,
        }
    }

    /// A reproducible source: two instances built from the same seed yield
    /// the same sequence of names.
    pub fn with_seed(seed: u64, gender: Option<Gender>) -> Self {
        Self {
            gender,
            generator: Generator::Seeded(Mutex::new(StdRng::seed_from_u64(seed))),
        }
    }
}

impl Default for RandomFirstNames {
    fn default() -> Self {
        Self::new(None)
    }
}

impl NameSource for RandomFirstNames {
    fn next_name(&self) -> Result<String, NameError> {
        let name = match &self.generator {
            Generator::Thread => draw(&mut rand::thread_rng(), self.gender)?,
            Generator::Seeded(rng) => {
                let mut rng = rng.lock().unwrap_or_else(PoisonError::into_inner);
                draw(&mut *rng, self.gender)?
            }
        };
        Ok(name.to_string())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::{first_name, RandomFirstNames};
    use crate::{
        table::{FEMALE, MALE},
        Gender, NameSource,
    };

    fn in_table(table: &[(&str, u32)], name: &str) -> bool {
        table.iter().any(|(candidate, _)| *candidate == name)
    }

    #[test]
    fn names_are_never_empty() {
        let source = RandomFirstNames::default();
        for _ in 0..200 {
            assert!(!source.next_name().unwrap().is_empty());
        }
    }

    #[test]
    fn gender_restricts_the_table() {
        let male = RandomFirstNames::new(Some(Gender::Male));
        let female = RandomFirstNames::new(Some(Gender::Female));
        for _ in 0..200 {
            let name = male.next_name().unwrap();
            assert!(in_table(MALE, &name), "{} is not a male name", name);
            let name = female.next_name().unwrap();
            assert!(in_table(FEMALE, &name), "{} is not a female name", name);
        }
    }

    #[test]
    fn unrestricted_source_draws_from_both_tables() {
        let source = RandomFirstNames::with_seed(7, None);
        let names: Vec<String> = (0..500).map(|_| source.next_name().unwrap()).collect();
        assert!(names.iter().any(|name| in_table(MALE, name)));
        assert!(names.iter().any(|name| in_table(FEMALE, name)));
    }

    #[test]
    fn seeded_sources_are_reproducible() {
        let a = RandomFirstNames::with_seed(42, None);
        let b = RandomFirstNames::with_seed(42, None);
        for _ in 0..50 {
            assert_eq!(a.next_name().unwrap(), b.next_name().unwrap());
        }
    }

    #[test]
    fn names_have_variety() {
        let names: HashSet<String> = (0..300).map(|_| first_name(None).unwrap()).collect();
        assert!(names.len() > 10, "expected variety, got {} unique names", names.len());
    }

    #[test]
    fn frequent_names_come_up_more_often() {
        let source = RandomFirstNames::with_seed(1, Some(Gender::Female));
        let draws: Vec<String> = (0..5000).map(|_| source.next_name().unwrap()).collect();
        let mary = draws.iter().filter(|name| *name == "Mary").count();
        let diane = draws.iter().filter(|name| *name == "Diane").count();
        assert!(mary > diane, "Mary drawn {} times, Diane {} times", mary, diane);
    }
}
