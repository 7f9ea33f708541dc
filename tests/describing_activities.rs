//! Activity and question descriptions
//!
//! Descriptions are rendered lazily and must read as business prose: literal
//! values quoted, nested questions shown by their own description, lists
//! comma-joined with " and " before the final element.

use troupe::web::{
    Accept, Click, Dismiss, ModalDialog, Navigate, Select, Selected, Selector, Target,
    TargetElement, TargetElements, Text,
};

fn country_selector() -> TargetElement {
    Target::the("country selector").located(Selector::id("single-option-select"))
}

fn another_country_name() -> TargetElement {
    Target::the("another country name").located(Selector::css("#another-country-of-interest-name"))
}

fn country_names() -> TargetElements {
    Target::all("country names").located(Selector::css("#country-of-interest-names li"))
}

#[test]
fn select_value_describes_the_value_and_the_control() {
    assert_eq!(
        Select::value("FR").from(&country_selector()).to_string(),
        "#actor selects value 'FR' from the country selector"
    );
}

#[test]
fn select_value_shows_a_nested_question_by_its_description() {
    assert_eq!(
        Select::value(Text::of(&another_country_name()))
            .from(&country_selector())
            .to_string(),
        "#actor selects value the text of the another country name from the country selector"
    );
}

#[test]
fn select_values_joins_the_flattened_declaration() {
    assert_eq!(
        Select::values((["PL", "DE"], "FR"))
            .from(&country_selector())
            .to_string(),
        "#actor selects values 'PL', 'DE' and 'FR' from the country selector"
    );
}

#[test]
fn two_declared_values_join_without_a_comma() {
    assert_eq!(
        Select::values(("PL", "DE"))
            .from(&country_selector())
            .to_string(),
        "#actor selects values 'PL' and 'DE' from the country selector"
    );
}

#[test]
fn select_option_describes_the_label() {
    assert_eq!(
        Select::option("France").from(&country_selector()).to_string(),
        "#actor selects 'France' from the country selector"
    );
}

#[test]
fn select_options_mixes_literals_and_question_descriptions() {
    assert_eq!(
        Select::options((
            ["Poland", "Germany"],
            "France",
            Text::of(&another_country_name()),
        ))
        .from(&country_selector())
        .to_string(),
        "#actor selects 'Poland', 'Germany', 'France' and the text of the another country name \
         from the country selector"
    );
}

#[test]
fn selected_questions_describe_the_control() {
    assert_eq!(
        Selected::value_of(&country_selector()).to_string(),
        "value selected in the country selector"
    );
    assert_eq!(
        Selected::values_of(&country_selector()).to_string(),
        "values selected in the country selector"
    );
    assert_eq!(
        Selected::option_in(&country_selector()).to_string(),
        "option selected in the country selector"
    );
    assert_eq!(
        Selected::options_in(&country_selector()).to_string(),
        "options selected in the country selector"
    );
}

#[test]
fn text_questions_describe_their_targets() {
    assert_eq!(
        Text::of(&another_country_name()).to_string(),
        "the text of the another country name"
    );
    assert_eq!(
        Text::of_all(&country_names()).to_string(),
        "the text of the country names"
    );
}

#[test]
fn dialog_interactions_describe_the_dialog_question() {
    assert_eq!(
        Dismiss::the(ModalDialog::window()).to_string(),
        "#actor dismisses the modal dialog window"
    );
    assert_eq!(
        Accept::the(ModalDialog::window()).to_string(),
        "#actor accepts the modal dialog window"
    );
}

#[test]
fn click_and_navigate_describe_their_subjects() {
    let trigger = Target::the("trigger button").located(Selector::css("[data-test=\"trigger\"]"));
    assert_eq!(
        Click::on(&trigger).to_string(),
        "#actor clicks on the trigger button"
    );
    assert_eq!(
        Navigate::to("https://example.org/form").to_string(),
        "#actor navigates to 'https://example.org/form'"
    );
}
