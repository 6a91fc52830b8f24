//! Shared button with the three visual variants the pages use.

use leptos::prelude::*;

/// Visual weight of a [`Button`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Danger,
}

impl ButtonVariant {
    fn classes(self) -> &'static str {
        match self {
            ButtonVariant::Primary => {
                "bg-blue-600 text-white hover:bg-blue-700 disabled:bg-blue-300"
            }
            ButtonVariant::Secondary => {
                "bg-white text-gray-700 border border-gray-300 hover:bg-gray-50"
            }
            ButtonVariant::Danger => "bg-red-600 text-white hover:bg-red-700 disabled:bg-red-300",
        }
    }
}

#[component]
pub fn Button(
    #[prop(into)] label: Signal<String>,
    on_click: Callback<()>,
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional, into)] disabled: Signal<bool>,
) -> impl IntoView {
    let class = format!(
        "px-4 py-2 rounded-md text-sm font-medium disabled:cursor-not-allowed {}",
        variant.classes()
    );
    view! {
        <button
            type="button"
            class=class
            disabled=move || disabled.get()
            on:click=move |_| on_click.run(())
        >
            {move || label.get()}
        </button>
    }
}
