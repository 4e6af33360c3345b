use rand::Rng;
use rand::seq::SliceRandom;
use stepform::application::session::WizardSession;
use stepform::domain::form::FormData;
use stepform::domain::step::{Field, Step};
use stepform::domain::validation::{rules, validate_step};

const ALPHABET: &[char] = &['0', '1', '9', 'a', 'Z', '@', '.', '/', ' ', '\t', '-'];

fn random_value(rng: &mut impl Rng) -> String {
    let len = rng.gen_range(0..12);
    (0..len)
        .map(|_| *ALPHABET.choose(rng).unwrap())
        .collect()
}

fn random_form(rng: &mut impl Rng) -> FormData {
    let mut form = FormData::default();
    for step in Step::ALL {
        for entry in rules(step) {
            form.set(entry.field, random_value(rng));
        }
    }
    form
}

#[test]
fn test_validation_is_idempotent() {
    let mut rng = rand::thread_rng();
    for _ in 0..500 {
        let form = random_form(&mut rng);
        for step in Step::ALL {
            assert_eq!(validate_step(step, &form), validate_step(step, &form));
        }
    }
}

#[test]
fn test_errors_only_name_fields_of_the_validated_step() {
    let mut rng = rand::thread_rng();
    for _ in 0..200 {
        let form = random_form(&mut rng);
        for step in Step::ALL {
            for (field, _) in validate_step(step, &form).iter() {
                assert_eq!(field.step(), step);
            }
        }
    }
}

#[test]
fn test_rejected_next_never_moves_the_cursor() {
    let mut rng = rand::thread_rng();
    for _ in 0..200 {
        let mut session = WizardSession::new();
        session.edit_field(1, "name", random_value(&mut rng)).unwrap();
        session.edit_field(1, "email", random_value(&mut rng)).unwrap();

        let state = session.next();
        if state.errors.is_empty() {
            assert_eq!(state.step, Step::Address);
        } else {
            assert_eq!(state.step, Step::Personal);
            assert!(state.errors.get(Field::Email).is_some() || state.errors.get(Field::Name).is_some());
        }
    }
}

#[test]
fn test_rule_table_covers_every_field_once() {
    let mut fields: Vec<Field> = Step::ALL
        .iter()
        .flat_map(|step| rules(*step).iter().map(|entry| entry.field))
        .collect();
    assert_eq!(fields.len(), 8);
    fields.sort();
    fields.dedup();
    assert_eq!(fields.len(), 8);
}
