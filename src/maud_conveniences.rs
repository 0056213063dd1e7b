use crate::registration::Notice;
use maud::{Markup, Render, html};

pub fn title(s: impl Render) -> Markup {
    html! {
        h1 class="text-2xl font-semibold mb-4" {(s)}
    }
}

pub fn subtitle(s: impl Render) -> Markup {
    html! {
        h2 class="text-xl font-semibold mb-4" {(s)}
    }
}

pub fn simple_form_element(
    id: &'static str,
    label: &'static str,
    required: bool,
    input_type: Option<&'static str>,
    value: Option<&str>,
    invalid: bool,
) -> Markup {
    html! {
        div class="mb-4" {
            label for=(id) class="block text-sm font-bold mb-2 text-gray-300" {(label)}
            input required[required] type=(input_type.unwrap_or("text")) id=(id) name=(id) value=[value] aria-invalid=[invalid.then_some("true")] class="shadow appearance-none border rounded w-full py-2 px-3 leading-tight focus:outline-none focus:shadow-outline bg-gray-700 border-gray-600" {}
        }
    }
}

pub fn form_submit_button(label: Option<&str>) -> Markup {
    html! {
        div class="flex items-center justify-between" {
            button type="submit" class="bg-blue-500 hover:bg-blue-700 font-bold py-2 px-4 rounded focus:outline-none focus:shadow-outline" {
                (label.unwrap_or("Submit"))
            }
        }
    }
}

/// A modal notice the user has to dismiss before carrying on.
pub fn notice(notice: &Notice) -> Markup {
    let colours = match notice {
        Notice::Success => "bg-green-100 border border-green-400 text-green-700",
        Notice::Failure(_) => "bg-red-100 border border-red-400 text-red-700",
    };

    html! {
        dialog open role="alertdialog" aria-modal="true" class={(colours) " fixed inset-0 m-auto h-fit w-fit px-6 py-4 rounded shadow-lg shadow-black/60 z-50"} {
            p class="mb-4" {(notice.message())}
            form method="dialog" class="flex justify-end" {
                button type="submit" autofocus class="bg-slate-600 hover:bg-slate-800 text-white font-bold py-1 px-4 rounded" {"OK"}
            }
        }
    }
}
