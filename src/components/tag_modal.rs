//! Create/edit dialog for group tags.
//!
//! Validation mirrors the server's limits so the admin gets field errors
//! before a round trip: name 2-50 characters required, description up to
//! 200 characters optional.

#[cfg(test)]
#[path = "tag_modal_test.rs"]
mod tag_modal_test;

use leptos::prelude::*;

use crate::components::button::{Button, ButtonVariant};
use crate::components::form_input::FormInput;
use crate::components::modal::Modal;
use crate::net::types::Tag;

/// Field errors for the tag form; empty strings mean valid.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TagFormErrors {
    pub name: String,
    pub description: String,
}

impl TagFormErrors {
    pub fn is_valid(&self) -> bool {
        self.name.is_empty() && self.description.is_empty()
    }
}

/// Check the tag form fields against the platform's limits.
pub fn validate_tag_form(name: &str, description: &str) -> TagFormErrors {
    let mut errors = TagFormErrors::default();
    let name = name.trim();
    if name.is_empty() {
        errors.name = "Tag name is required".to_owned();
    } else if name.chars().count() < 2 {
        errors.name = "Tag name must be at least 2 characters".to_owned();
    } else if name.chars().count() > 50 {
        errors.name = "Tag name must be less than 50 characters".to_owned();
    }
    if description.chars().count() > 200 {
        errors.description = "Description must be less than 200 characters".to_owned();
    }
    errors
}

/// Modal form for creating a tag or editing `existing`. Submits trimmed
/// `(name, description)` through `on_submit` once the fields validate.
#[component]
pub fn TagModal(
    existing: Option<Tag>,
    on_submit: Callback<(String, Option<String>)>,
    on_close: Callback<()>,
    #[prop(optional, into)] busy: Signal<bool>,
) -> impl IntoView {
    let editing = existing.is_some();
    let name = RwSignal::new(existing.as_ref().map(|tag| tag.name.clone()).unwrap_or_default());
    let description = RwSignal::new(
        existing.and_then(|tag| tag.description).unwrap_or_default(),
    );
    let errors = RwSignal::new(TagFormErrors::default());

    let submit = Callback::new(move |()| {
        let checked = validate_tag_form(&name.get(), &description.get());
        if !checked.is_valid() {
            errors.set(checked);
            return;
        }
        errors.set(TagFormErrors::default());
        let trimmed_name = name.get().trim().to_owned();
        let trimmed_description = description.get().trim().to_owned();
        let description =
            if trimmed_description.is_empty() { None } else { Some(trimmed_description) };
        on_submit.run((trimmed_name, description));
    });

    let title = if editing { "Edit Tag" } else { "Create Tag" };
    let submit_label = move || {
        if busy.get() {
            "Saving...".to_owned()
        } else if editing {
            "Save Changes".to_owned()
        } else {
            "Create Tag".to_owned()
        }
    };

    view! {
        <Modal title=title on_close=on_close>
            <div class="space-y-4">
                <FormInput
                    label="Tag Name"
                    value=name
                    placeholder="e.g. vehicle"
                    error=Signal::derive(move || errors.get().name)
                />
                <FormInput
                    label="Description (optional)"
                    value=description
                    rows=3
                    error=Signal::derive(move || errors.get().description)
                />
                <div class="flex justify-end space-x-3">
                    <Button
                        label="Cancel".to_owned()
                        variant=ButtonVariant::Secondary
                        on_click=Callback::new(move |()| on_close.run(()))
                    />
                    <Button label=Signal::derive(submit_label) disabled=busy on_click=submit/>
                </div>
            </div>
        </Modal>
    }
}
