use blogtools_llm::ideas::parse_ideas;

#[test]
fn strips_numbers_and_blank_lines() {
    let ideas = parse_ideas("1. Add a calculator\n2. Build a quiz");
    assert_eq!(ideas, vec!["Add a calculator", "Build a quiz"]);
}

#[test]
fn tolerates_blank_lines_and_padding() {
    let text = "\n\n1.   Savings calculator  \n\n\n2.Mortgage comparison chart\r\n3. Packing checklist\n";
    assert_eq!(
        parse_ideas(text),
        vec![
            "Savings calculator",
            "Mortgage comparison chart",
            "Packing checklist"
        ]
    );
}

#[test]
fn passes_through_more_or_fewer_than_five() {
    assert_eq!(parse_ideas("1. Only one").len(), 1);

    let seven = (1..=7)
        .map(|i| format!("{i}. Idea {i}"))
        .collect::<Vec<_>>()
        .join("\n");
    assert_eq!(parse_ideas(&seven).len(), 7);
}

#[test]
fn keeps_unnumbered_lines_and_leading_numbers_without_a_dot() {
    let ideas = parse_ideas("Reading time estimator\n2024 trends timeline\n10. Tip jar");
    assert_eq!(
        ideas,
        vec!["Reading time estimator", "2024 trends timeline", "Tip jar"]
    );
}

#[test]
fn empty_reply_yields_no_ideas() {
    assert!(parse_ideas("").is_empty());
    assert!(parse_ideas("\n \n").is_empty());
}
