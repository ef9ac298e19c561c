//! First-name frequency tables.
//!
//! Weights are the share of the population carrying the name, in thousandths
//! of a percent, taken from the 1990 US census first-name lists.

use crate::Gender;

pub(crate) type Entry = (&'static str, u32);

pub(crate) fn for_gender(gender: Gender) -> &'static [Entry] {
    match gender {
        Gender::Male => MALE,
        Gender::Female => FEMALE,
    }
}

pub(crate) const MALE: &[Entry] = &[
    ("James", 3318),
    ("John", 3271),
    ("Robert", 3143),
    ("Michael", 2629),
    ("William", 2451),
    ("David", 2363),
    ("Richard", 1703),
    ("Charles", 1523),
    ("Joseph", 1404),
    ("Thomas", 1380),
    ("Christopher", 1035),
    ("Daniel", 974),
    ("Paul", 948),
    ("Mark", 938),
    ("Donald", 931),
    ("George", 927),
    ("Kenneth", 826),
    ("Steven", 780),
    ("Edward", 779),
    ("Brian", 736),
    ("Ronald", 725),
    ("Anthony", 721),
    ("Kevin", 671),
    ("Jason", 660),
    ("Matthew", 657),
    ("Gary", 650),
    ("Timothy", 640),
    ("Jose", 613),
    ("Larry", 598),
    ("Jeffrey", 591),
    ("Frank", 581),
    ("Scott", 546),
    ("Eric", 544),
    ("Stephen", 540),
    ("Andrew", 537),
    ("Raymond", 488),
    ("Gregory", 441),
    ("Joshua", 435),
    ("Jerry", 432),
    ("Dennis", 415),
    ("Walter", 399),
    ("Patrick", 389),
    ("Peter", 381),
    ("Harold", 371),
    ("Douglas", 367),
    ("Henry", 365),
    ("Carl", 346),
    ("Arthur", 335),
    ("Ryan", 328),
    ("Roger", 322),
];

pub(crate) const FEMALE: &[Entry] = &[
    ("Mary", 2629),
    ("Patricia", 1073),
    ("Linda", 1035),
    ("Barbara", 980),
    ("Elizabeth", 937),
    ("Jennifer", 932),
    ("Maria", 828),
    ("Susan", 794),
    ("Margaret", 768),
    ("Dorothy", 727),
    ("Lisa", 704),
    ("Nancy", 669),
    ("Karen", 667),
    ("Betty", 666),
    ("Helen", 663),
    ("Sandra", 629),
    ("Donna", 583),
    ("Carol", 565),
    ("Ruth", 562),
    ("Sharon", 522),
    ("Michelle", 519),
    ("Laura", 510),
    ("Sarah", 508),
    ("Kimberly", 504),
    ("Deborah", 494),
    ("Jessica", 490),
    ("Shirley", 482),
    ("Cynthia", 469),
    ("Angela", 468),
    ("Melissa", 462),
    ("Brenda", 455),
    ("Amy", 451),
    ("Anna", 440),
    ("Rebecca", 430),
    ("Virginia", 430),
    ("Kathleen", 424),
    ("Pamela", 416),
    ("Martha", 412),
    ("Debra", 408),
    ("Amanda", 404),
    ("Stephanie", 400),
    ("Carolyn", 385),
    ("Christine", 382),
    ("Marie", 379),
    ("Janet", 379),
    ("Catherine", 373),
    ("Frances", 370),
    ("Ann", 364),
    ("Joyce", 364),
    ("Diane", 359),
];
