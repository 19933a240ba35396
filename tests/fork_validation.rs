use openquest::config::ForkRules;
use openquest::fork::{compute_field_difference, get_difficulty_indicator, validate_fork, validate_fork_with};
use openquest::models::{ComparableField, DifficultyLevel, ProblemText};

fn carbon_problem() -> ProblemText {
    ProblemText::new(
        "Small businesses can't track carbon emissions",
        "Most small businesses have no affordable way to measure the carbon footprint of their daily operations.",
        "Owners of cafes, shops and small offices want to reduce their environmental impact, but existing \
         carbon accounting software is built for large enterprises. It is expensive, requires consultants, \
         and assumes detailed energy data that small businesses simply do not collect. As a result most \
         small businesses never measure their emissions at all.",
    )
}

fn soil_problem() -> ProblemText {
    ProblemText::new(
        "Rural farmers in Kenya lack soil health data",
        "Smallholder growers across East Africa cannot afford lab tests that reveal nutrient deficiencies in their fields.",
        "Maize and bean growers near Nakuru rely on guesswork when buying fertilizer. Laboratory soil \
         analysis costs more than a season of seed, results take weeks to arrive, and extension officers \
         visit each village only once or twice per year. Cheap handheld sensors paired with SMS advice \
         could let families apply the right nutrients at planting time.",
    )
}

#[test]
fn identical_copy_is_rejected_on_every_field() {
    let result = validate_fork(&carbon_problem(), &carbon_problem());

    assert!(!result.is_valid);
    assert_eq!(result.overall_diff, 0);
    assert_eq!(result.errors.len(), 3);
    assert!(result.errors[0].starts_with("Title"));
    assert!(result.errors[1].starts_with("Pitch"));
    assert!(result.errors[2].starts_with("Description"));
}

#[test]
fn reworded_fork_passes() {
    let result = validate_fork(&carbon_problem(), &soil_problem());

    assert!(result.is_valid, "unexpected errors: {:?}", result.errors);
    assert!(result.errors.is_empty());
    assert!(result.title_diff >= 30);
    assert!(result.pitch_diff >= 40);
    assert!(result.description_diff >= 50);
    assert_eq!(get_difficulty_indicator(result.overall_diff).level, DifficultyLevel::High);
}

#[test]
fn unchanged_title_blocks_rewritten_body() {
    let mut candidate = soil_problem();
    candidate.title = carbon_problem().title;

    let result = validate_fork(&carbon_problem(), &candidate);

    assert_eq!(result.title_diff, 0);
    assert!(result.description_diff >= 90);
    assert!(result.overall_diff >= 70);
    assert!(!result.is_valid);
    assert_eq!(result.errors.len(), 1);
    assert!(result.errors[0].contains("Title"));
    assert!(result.errors[0].contains("30%"));
    assert_eq!(result.failing_fields()[0].field, ComparableField::Title);
}

#[test]
fn case_and_spacing_changes_do_not_count() {
    let original = carbon_problem();
    let candidate = ProblemText::new(
        original.title.to_uppercase(),
        format!("  {}  ", original.pitch.replace(' ', "   ")),
        original.description.to_lowercase(),
    );

    let result = validate_fork(&original, &candidate);
    assert_eq!(result.overall_diff, 0);
    assert!(!result.is_valid);
}

#[test]
fn empty_candidate_counts_as_fully_different() {
    let result = validate_fork(&carbon_problem(), &ProblemText::default());
    assert_eq!(result.title_diff, 100);
    assert_eq!(result.pitch_diff, 100);
    assert_eq!(result.description_diff, 100);
    assert!(result.is_valid);
}

#[test]
fn small_title_edit_still_too_similar() {
    let mut candidate = soil_problem();
    candidate.title = "Small businesses can't track their carbon emissions".to_string();

    let result = validate_fork(&carbon_problem(), &candidate);
    assert!(result.title_diff < 30);
    assert!(!result.is_valid);
}

#[test]
fn stricter_rules_reject_what_defaults_accept() {
    let mut candidate = soil_problem();
    candidate.title = "Small retailers cannot track carbon emissions".to_string();

    let defaults = validate_fork(&carbon_problem(), &candidate);
    assert!(defaults.is_valid, "unexpected errors: {:?}", defaults.errors);

    let strict = ForkRules {
        thresholds: openquest::models::PerField::new(60, 40, 50),
        ..Default::default()
    };
    let result = validate_fork_with(&carbon_problem(), &candidate, &strict);
    assert!(!result.is_valid);
    assert!(result.errors[0].contains("60%"));
}

#[test]
fn field_difference_monotonicity() {
    let base = "the quick brown fox";
    let small = compute_field_difference(base, "the quick brown fox!");
    let large = compute_field_difference(base, "the quick brown fox jumps over the lazy dog");
    let unrelated = compute_field_difference(base, "pack my box with five dozen liquor jugs");

    assert!(large > small);
    assert!(small < unrelated && large < unrelated);
}

#[test]
fn swapping_arguments_keeps_scores_close() {
    let a = carbon_problem().pitch;
    let b = "Most small shops have no affordable way to estimate the carbon footprint of their operations.";
    let forward = i16::from(compute_field_difference(&a, b));
    let backward = i16::from(compute_field_difference(b, &a));
    assert!((forward - backward).abs() <= 2);
}
