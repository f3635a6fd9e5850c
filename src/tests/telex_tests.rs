use std::sync::Mutex;

use crate::{
    Classification, Country, InternalLogicError, InvalidRuleSetError, PhoneNumberType, RuleSet,
    TELEX, Telex, TelephoneNumber, only_digits,
    rule_sets::{Spain, UnitedKingdom},
};

static ONCE: std::sync::Once = std::sync::Once::new();

fn get_telex() -> &'static Telex {
    ONCE.call_once(|| colog::default_builder()
        .filter_level(log::LevelFilter::Trace)
        .init()
    );

    &TELEX
}

/// Delegates to a real rule-set and remembers every national number handed
/// to its classifier.
struct RecordingRuleSet<R> {
    inner: R,
    classified: Mutex<Vec<String>>,
}

impl<R: RuleSet> RecordingRuleSet<R> {
    fn new(inner: R) -> Self {
        Self { inner, classified: Mutex::new(Vec::new()) }
    }

    fn classified(&self) -> Vec<String> {
        self.classified.lock().unwrap().clone()
    }
}

impl<R: RuleSet> RuleSet for RecordingRuleSet<R> {
    fn iso_alpha2_country_code(&self) -> &str {
        self.inner.iso_alpha2_country_code()
    }

    fn country_calling_code(&self) -> &str {
        self.inner.country_calling_code()
    }

    fn trunk_code(&self) -> &str {
        self.inner.trunk_code()
    }

    fn national_number_lengths(&self) -> &[usize] {
        self.inner.national_number_lengths()
    }

    fn classify_and_format(&self, number: TelephoneNumber) -> Classification {
        self.classified
            .lock()
            .unwrap()
            .push(number.national_number().to_owned());
        self.inner.classify_and_format(number)
    }
}

/// A configurable rule-set that either rejects everything or claims a match
/// without confirming it.
struct CustomRuleSet {
    country_calling_code: &'static str,
    trunk_code: &'static str,
    national_number_lengths: &'static [usize],
    claims_unconfirmed_matches: bool,
}

impl CustomRuleSet {
    fn rejecting(country_calling_code: &'static str, trunk_code: &'static str, national_number_lengths: &'static [usize]) -> Self {
        Self { country_calling_code, trunk_code, national_number_lengths, claims_unconfirmed_matches: false }
    }
}

impl RuleSet for CustomRuleSet {
    fn iso_alpha2_country_code(&self) -> &str {
        "ZZ"
    }

    fn country_calling_code(&self) -> &str {
        self.country_calling_code
    }

    fn trunk_code(&self) -> &str {
        self.trunk_code
    }

    fn national_number_lengths(&self) -> &[usize] {
        self.national_number_lengths
    }

    fn classify_and_format(&self, number: TelephoneNumber) -> Classification {
        if self.claims_unconfirmed_matches {
            return Ok(number);
        }
        self.reject(number)
    }
}

#[test]
fn match_number() {
    use PhoneNumberType::*;

    let test_cases: Vec<(&str, Option<(&str, PhoneNumberType, &str)>)> = vec![
        ("+34 971 897 542", Some(("ES", FixedLine, "971897542"))),
        ("+34 644 450 285", Some(("ES", Mobile, "644450285"))),
        ("+34 902 101 001", Some(("ES", NonGeographic, "902101001"))),
        ("+34 (0)661 745 414", None),
        ("+34 (0) 689 469 899", None),
        ("+33 (0)4 67 30 33 12 36", None),
        ("+33 (0)4 50 79 09 41", Some(("FR", FixedLine, "0450790941"))),
        ("+33 6 34 04 04 67", Some(("FR", Mobile, "0634040467"))),
        ("+33 (0)9 83 02 14 16", Some(("FR", NonGeographic, "0983021416"))),
        ("+41 (0) 277 71 24 58", Some(("CH", FixedLine, "0277712458"))),
        ("+41 (0)76 575 23 94", Some(("CH", Mobile, "0765752394"))),
        ("0041 800 333 313", Some(("CH", NonGeographic, "0800333313"))),
        ("+39 (0)3 93 94 21", Some(("IT", FixedLine, "03939421"))),
        ("+39 351 6784830", Some(("IT", Mobile, "3516784830"))),
        ("+377 93 15 36 00", Some(("MC", FixedLine, "93153600"))),
        ("+377 93 50 12 12", Some(("MC", FixedLine, "93501212"))),
        ("+44 (0)1572 823352", Some(("GB", FixedLine, "01572823352"))),
        ("+44 (0)785 056 6978", Some(("GB", Mobile, "07850566978"))),
        ("+44 (0)345 021 0222", Some(("GB", NonGeographic, "03450210222"))),
        ("0044 (0)1234 567890", Some(("GB", FixedLine, "01234567890"))),
        ("+45 35 36 66 00", Some(("DK", FixedLine, "35366600"))),
        ("+45 40682739", Some(("DK", Mobile, "40682739"))),
        ("+45 70 10 50 95", Some(("DK", NonGeographic, "70105095"))),
        ("+32 (0)2 583 19 43", None),
    ];

    let telex = get_telex();
    for (raw, expected) in test_cases {
        let number = telex.match_number(raw);
        let actual = number.as_ref().map(|number| {
            (
                number.iso_alpha2_country_code(),
                number.number_type().unwrap(),
                number.national_number(),
            )
        });
        assert_eq!(expected, actual, "matching {raw:?}");

        if let Some(number) = number {
            assert!(number.is_confirmed());
            assert_eq!(raw, number.source());
        }
    }
}

#[test]
fn format_intl() {
    let test_cases = [
        ("+34 (0)971 897 542", None),
        ("+34 492 023 377", None),
        ("+34 971 427 07", None),
        ("+32 (0)2 583 19 43", None),
        ("+34 644 450 285", Some("+34 644 450 285")),
        ("(+34) 917 206 710", Some("+34 91 720 67 10")),
        ("(00 34) 871 716 162", Some("+34 871 716 162")),
        ("+34 902 404 444", Some("+34 902 404 444")),
        ("+34 902 343 432", Some("+34 902 343 432")),
        ("871530363", Some("+34 871 530 363")),
        ("(971) 670 238", Some("+34 971 670 238")),
        ("+33 (0)4 50 79 09 41", Some("+33 4 50 79 09 41")),
        ("+33 6 34 04 04 67", Some("+33 6 34 04 04 67")),
        ("+33 (0)9 83 02 14 16", Some("+33 9 83 02 14 16")),
        ("+33 (0)8 10 00 80 60", Some("+33 8 10 00 80 60")),
        ("+33(0)4 90 86 16 50", Some("+33 4 90 86 16 50")),
        ("+41 (0) 277 71 24 58", Some("+41 27 771 24 58")),
        ("+41 (0)76 575 23 94", Some("+41 76 575 23 94")),
        ("0041 800 333 313", Some("+41 80 033 33 13")),
        ("+41 (0)5 88 66 42 30", Some("+41 58 866 42 30")),
        ("+41 (0)8 48 09 10 91", Some("+41 84 809 10 91")),
        ("+39 (0)3 93 94 21", Some("+39 039 39421")),
        ("+39 351 6784830", Some("+39 3516 784830")),
        ("+39 3 38 25 83 328", Some("+39 338 2583328")),
        ("+377 93 15 36 00", Some("+377 93 15 36 00")),
        ("+44 (0)1572 823352", Some("+44 1572 823352")),
        ("+44 (0)785 056 6978", Some("+44 7850 566978")),
        ("+44 (0)345 021 0222", Some("+44 345 021 0222")),
        ("+44 (0)20 7223 1200", Some("+44 20 7223 1200")),
        ("+44 (0)118 907 1816", Some("+44 118 907 1816")),
        ("+44 (0)184 421 5822", Some("+44 1844 215822")),
        ("+44 (0)1752 837 734", Some("+44 1752 837734")),
        ("+44 (0) 1786 833 908", Some("+44 1786 833908")),
        ("+44 (0)1654 634 123", Some("+44 1654 634123")),
        ("+44 (0)800 410 1181", Some("+44 800 410 1181")),
        ("+44 (0)845 519 2494", Some("+44 845 519 2494")),
        ("+44 (0)8707 541779", Some("+44 870 754 1779")),
        ("0044 (0)1234 567890", Some("+44 1234 567890")),
        ("+45 28 49 52 05", Some("+45 28 49 52 05")),
        ("+45 40682739", Some("+45 40 68 27 39")),
    ];

    let telex = get_telex();
    for (raw, expected) in test_cases {
        assert_eq!(
            expected.map(str::to_owned),
            telex.format_intl(raw),
            "formatting {raw:?}"
        );
    }
}

#[test]
fn classification_is_stable_on_formatted_output() {
    let inputs = [
        "+34 971 897 542", "(+34) 917 206 710", "+34 902 101 001",
        "+33 (0)4 50 79 09 41", "+33 6 34 04 04 67",
        "+41 (0) 277 71 24 58", "0041 800 333 313",
        "+39 (0)3 93 94 21", "+39 351 6784830",
        "+377 93 15 36 00",
        "+44 (0)20 7223 1200", "+44 (0)785 056 6978", "+44 (0)8707 541779",
        "+45 35 36 66 00", "+45 70 10 50 95",
    ];

    let telex = get_telex();
    for raw in inputs {
        let first = telex.match_number(raw).unwrap();
        let country_calling_code = first.country_calling_code();
        let digits = only_digits(first.formatted().unwrap());
        let rewritten = format!("+{} {}", country_calling_code, &digits[country_calling_code.len()..]);

        let rule_set = telex
            .rule_sets()
            .iter()
            .find(|rule_set| rule_set.iso_alpha2_country_code() == first.iso_alpha2_country_code())
            .unwrap();
        let second = telex.match_number_with(&rewritten, rule_set.as_ref()).unwrap();

        assert_eq!(first.number_type(), second.number_type(), "re-matching {rewritten:?}");
        assert_eq!(first.national_number(), second.national_number());
        assert_eq!(first.formatted(), second.formatted());
    }
}

#[test]
fn illegal_lengths_never_reach_the_classifier() {
    let inputs = [
        "0044 (0)1234 567890", "441234567890", "44123456789", "1234567890",
        "+44 (0)1234 56789012", "00441234", "", "+44 1",
    ];

    let telex = get_telex();
    for raw in inputs {
        let rule_set = RecordingRuleSet::new(UnitedKingdom);
        telex.match_number_with(raw, &rule_set);

        for national_number in rule_set.classified() {
            assert!(
                [10, 11].contains(&national_number.len()),
                "{national_number:?} of {raw:?} was classified"
            );
        }
    }
}

#[test]
fn explicit_calling_code_of_another_country_skips_the_rule_set() {
    let rule_set = RecordingRuleSet::new(UnitedKingdom);
    assert_eq!(None, get_telex().match_number_with("+99 123456", &rule_set));
    assert!(rule_set.classified().is_empty());
}

#[test]
fn national_number_with_trunk_code_is_not_prefixed_again() {
    let rule_set = RecordingRuleSet::new(UnitedKingdom);
    assert_eq!(None, get_telex().match_number_with("1234567890", &rule_set));
    assert_eq!(vec!["1234567890".to_owned()], rule_set.classified());

    let rule_set = RecordingRuleSet::new(UnitedKingdom);
    let number = get_telex().match_number_with("01234 567890", &rule_set).unwrap();
    assert_eq!("01234567890", number.national_number());
    assert_eq!(vec!["01234567890".to_owned()], rule_set.classified());
}

#[test]
fn candidates_are_classified_in_order_until_one_is_confirmed() {
    // read as +44 993456789 first, then as a national number
    let rule_set = RecordingRuleSet::new(UnitedKingdom);
    assert_eq!(None, get_telex().match_number_with("44993456789", &rule_set));
    assert_eq!(vec!["0993456789".to_owned(), "44993456789".to_owned()], rule_set.classified());

    // the international reading wins as soon as it is recognised
    let rule_set = RecordingRuleSet::new(UnitedKingdom);
    let number = get_telex().match_number_with("44123456789", &rule_set).unwrap();
    assert_eq!("0123456789", number.national_number());
    assert_eq!(vec!["0123456789".to_owned()], rule_set.classified());
}

#[test]
fn installation_order_decides_between_countries() {
    // a French mobile number and a Basel fixed line at the same time
    let number = get_telex().match_number("0612345678").unwrap();
    assert_eq!("FR", number.iso_alpha2_country_code());
    assert_eq!(Some(PhoneNumberType::Mobile), number.number_type());

    let telex = Telex::for_countries(&[Country::Switzerland, Country::France]);
    let number = telex.match_number("0612345678").unwrap();
    assert_eq!("CH", number.iso_alpha2_country_code());
    assert_eq!(Some(PhoneNumberType::FixedLine), number.number_type());
    assert_eq!(Some("+41 61 234 56 78"), number.formatted());
}

#[test]
fn default_pipeline_installs_every_country() {
    let iso_codes: Vec<_> = Telex::default()
        .rule_sets()
        .iter()
        .map(|rule_set| rule_set.iso_alpha2_country_code().to_owned())
        .collect();
    assert_eq!(vec!["FR", "CH", "ES", "MC", "DK", "GB", "IT"], iso_codes);

    let telex = Telex::for_countries(&[Country::Spain]);
    assert_eq!(1, telex.rule_sets().len());
    assert_eq!(None, telex.match_number("+44 (0)1572 823352"));
    assert!(telex.match_number("+34 644 450 285").is_some());
}

#[test]
fn match_with_a_single_rule_set() {
    let telex = get_telex();
    assert!(telex.match_number_with("+34 644 450 285", &Spain).is_some());
    assert_eq!(None, telex.match_number_with("+34 644 450 285", &UnitedKingdom));
}

#[test]
fn empty_pipeline_matches_nothing() {
    let telex = Telex::with_rule_sets(Vec::new()).unwrap();
    assert!(telex.rule_sets().is_empty());
    assert_eq!(None, telex.match_number("+44 (0)1572 823352"));
}

#[test]
fn invalid_rule_sets_are_refused() {
    let test_cases = [
        (CustomRuleSet::rejecting("", "", &[8]), InvalidRuleSetError::InvalidCountryCallingCode("".to_owned())),
        (CustomRuleSet::rejecting("+1", "", &[8]), InvalidRuleSetError::InvalidCountryCallingCode("+1".to_owned())),
        (
            CustomRuleSet::rejecting("999", "O", &[8]),
            InvalidRuleSetError::InvalidTrunkCode { country_calling_code: "999".to_owned(), trunk_code: "O".to_owned() },
        ),
        (CustomRuleSet::rejecting("999", "", &[]), InvalidRuleSetError::NoNationalNumberLengths("999".to_owned())),
        (CustomRuleSet::rejecting("999", "0", &[0, 8]), InvalidRuleSetError::ZeroNationalNumberLength("999".to_owned())),
    ];

    for (rule_set, expected) in test_cases {
        let result = Telex::with_rule_sets(vec![Box::new(rule_set)]);
        assert_eq!(Some(expected), result.err());
    }

    assert!(Telex::with_rule_sets(vec![Box::new(CustomRuleSet::rejecting("999", "0", &[8]))]).is_ok());
}

#[test]
fn invalid_rule_set_matches_nothing_on_its_own() {
    let without_calling_code = RecordingRuleSet::new(CustomRuleSet {
        country_calling_code: "",
        trunk_code: "",
        national_number_lengths: &[6],
        claims_unconfirmed_matches: true,
    });
    assert_eq!(None, get_telex().match_number_with("123456", &without_calling_code));
    assert!(without_calling_code.classified().is_empty());

    let without_lengths = RecordingRuleSet::new(CustomRuleSet::rejecting("999", "", &[]));
    assert_eq!(None, get_telex().match_number_with("+999 123456", &without_lengths));
    assert!(without_lengths.classified().is_empty());
}

#[test]
fn unconfirmed_match_is_an_internal_error() {
    let rule_set = CustomRuleSet {
        country_calling_code: "999",
        trunk_code: "",
        national_number_lengths: &[6],
        claims_unconfirmed_matches: true,
    };
    let telex = Telex::with_rule_sets(vec![Box::new(rule_set)]).unwrap();

    assert_eq!(
        Err(InternalLogicError::UnconfirmedMatch { country_calling_code: "999".to_owned() }),
        telex.match_number_internal("123456")
    );
    // rejected before any classification
    assert_eq!(Ok(None), telex.match_number_internal("12345"));
}

#[test]
#[should_panic(expected = "this indicates a bug in the rule-set")]
fn unconfirmed_match_panics_at_the_public_boundary() {
    let rule_set = CustomRuleSet {
        country_calling_code: "999",
        trunk_code: "",
        national_number_lengths: &[6],
        claims_unconfirmed_matches: true,
    };
    let telex = Telex::with_rule_sets(vec![Box::new(rule_set)]).unwrap();
    telex.match_number("123456");
}

#[test]
fn shared_pipeline_is_usable_from_many_threads() {
    let inputs = ["+34 644 450 285", "0044 (0)1234 567890", "+33 6 34 04 04 67", "+32 (0)2 583 19 43"];
    let expected: Vec<_> = inputs.iter().map(|raw| get_telex().format_intl(raw)).collect();

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| inputs.iter().map(|raw| TELEX.format_intl(raw)).collect::<Vec<_>>()))
            .collect();
        for handle in handles {
            assert_eq!(expected, handle.join().unwrap());
        }
    });
}
