use scraper::{ElementRef, Html, Selector};

#[track_caller]
pub(crate) fn must_get_form(html: &Html) -> ElementRef<'_> {
    html.select(&Selector::parse("form").unwrap())
        .next()
        .expect("No form found")
}

#[track_caller]
pub(crate) fn assert_hx_endpoint(form: &ElementRef<'_>, endpoint: &str, attribute: &str) {
    let hx_endpoint = form
        .value()
        .attr(attribute)
        .unwrap_or_else(|| panic!("{attribute} attribute missing"));

    assert_eq!(
        hx_endpoint, endpoint,
        "want form with attribute {attribute}=\"{endpoint}\", got {hx_endpoint:?}"
    );
}

#[track_caller]
pub(crate) fn assert_form_input_with_value(
    form: &ElementRef<'_>,
    name: &str,
    type_: &str,
    value: &str,
) {
    for input in form.select(&Selector::parse("input").unwrap()) {
        let input_name = input.value().attr("name").unwrap_or_default();
        let input_type = input.value().attr("type").unwrap_or_default();

        if input_name == name && input_type == type_ {
            let input_value = input.value().attr("value").unwrap_or_default();

            assert_eq!(
                input_value, value,
                "want input with value \"{value}\", got {input_value:?}"
            );

            return;
        }
    }

    panic!("No input found with name \"{name}\" and type \"{type_}\"");
}

/// Assert that the form contains a textarea with `name` whose content is
/// `value`.
#[track_caller]
pub(crate) fn assert_form_textarea_with_value(form: &ElementRef<'_>, name: &str, value: &str) {
    for textarea in form.select(&Selector::parse("textarea").unwrap()) {
        let textarea_name = textarea.value().attr("name").unwrap_or_default();

        if textarea_name == name {
            let got_value = textarea.text().collect::<Vec<_>>().join("");
            let got_value = got_value.trim();

            assert_eq!(
                got_value, value,
                "want textarea with content \"{value}\", got {got_value:?}"
            );

            return;
        }
    }

    panic!("No textarea found with name \"{name}\"");
}

/// Assert that the form's color checkbox with `value` is checked (or not).
#[track_caller]
pub(crate) fn assert_checkbox_checked(form: &ElementRef<'_>, value: &str, want_checked: bool) {
    for input in form.select(&Selector::parse("input[type=\"checkbox\"]").unwrap()) {
        let input_value = input.value().attr("value").unwrap_or_default();

        if input_value == value {
            let got_checked = input.value().attr("checked").is_some();

            assert_eq!(
                got_checked, want_checked,
                "want checkbox {value} checked={want_checked}, got checked={got_checked}"
            );

            return;
        }
    }

    panic!("No checkbox found with value \"{value}\"");
}

#[track_caller]
pub(crate) fn assert_form_submit_button_with_text(form: &ElementRef<'_>, text: &str) {
    let submit_button = form
        .select(&Selector::parse("button[type=\"submit\"]").unwrap())
        .next()
        .expect("No submit button found");

    let got_text = submit_button.text().collect::<Vec<_>>().join("");
    let got_text = got_text.trim();
    assert_eq!(text, got_text);
}

#[track_caller]
pub(crate) fn assert_form_error_message(form: &ElementRef<'_>, want_error_message: &str) {
    let p = Selector::parse("p").unwrap();
    let mut error_messages = form.select(&p).map(|error_message| {
        error_message
            .text()
            .collect::<Vec<_>>()
            .join("")
            .trim()
            .to_owned()
    });

    assert!(
        error_messages.any(|got_error_message| got_error_message == want_error_message),
        "No error message found matching \"{want_error_message}\""
    );
}
