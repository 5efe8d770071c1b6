// tests/example_text.rs

use string_group::{Category, Run, classify, filter_runs_by_intervals};

const EXAMPLE: &str = "** 用户名User123在2023年10月15日购买了iPhone15手机，价格为¥6999元。 **Xx-()hello";

fn texts(runs: &[Run]) -> Vec<&'static str> {
    runs.iter().map(|r| r.text(EXAMPLE)).collect()
}

#[test]
fn test_han_runs_are_pure() {
    let groups = classify(EXAMPLE);
    let han = texts(groups.runs_for(Category::Han));
    assert_eq!(han, vec!["用户名", "在", "年", "月", "日购买了", "手机", "价格为", "元"]);
}

#[test]
fn test_common_runs() {
    let groups = classify(EXAMPLE);
    assert_eq!(texts(groups.runs_for(Category::Common)), vec!["**", "**Xx-()"]);
}

#[test]
fn test_letter_and_digit_runs() {
    let groups = classify(EXAMPLE);
    assert_eq!(
        texts(groups.runs_for(Category::Letter)),
        vec!["User", "iPhone", "hello"]
    );
    assert_eq!(
        texts(groups.runs_for(Category::Digit)),
        vec!["123", "2023", "10", "15", "15", "6999"]
    );
    assert_eq!(
        texts(groups.runs_for(Category::Other)),
        vec![" ", "，", "¥", "。 "]
    );
}

#[test]
fn test_four_byte_extraction() {
    let groups = classify(EXAMPLE);
    let wanted = [Category::Letter, Category::Digit, Category::Other];

    let runs = groups.merge_categories_coalesced(EXAMPLE, false, 4, 4, &wanted);
    assert!(runs.iter().all(|r| r.len() == 4));
    // ¥ fuses with 6999 into six bytes; "。 " is three bytes plus a space
    assert_eq!(texts(&runs), vec!["2023", "。 "]);

    // "。 " runs into the trailing "**"
    let checked = groups.merge_categories_coalesced(EXAMPLE, true, 4, 4, &wanted);
    assert_eq!(texts(&checked), vec!["2023"]);
}

#[test]
fn test_clip_to_window() {
    let groups = classify(EXAMPLE);
    let digits = groups.merge_categories(&[Category::Digit]);
    let start = EXAMPLE.find("2023").unwrap();
    let end = EXAMPLE.find("购").unwrap();
    let clipped = filter_runs_by_intervals(&[start..end], &digits);
    assert_eq!(texts(&clipped), vec!["2023", "10", "15"]);
}
