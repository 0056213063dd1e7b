use crate::{
    data::student::{DraftField, MissingFields, StudentRegistrationDraft},
    maud_conveniences::{form_submit_button, notice, simple_form_element, subtitle},
    registration::{Notice, RegistrationForm, SubmitOutcome},
    state::BibliotecaState,
};
use axum::{Form, extract::State, http::HeaderMap};
use maud::{Markup, html};

fn is_htmx(headers: &HeaderMap) -> bool {
    headers.contains_key("hx-request")
}

pub async fn get_student_registration(State(state): State<BibliotecaState>) -> Markup {
    state.render(internal_render_registration_form(
        &StudentRegistrationDraft::default(),
        MissingFields::empty(),
        None,
    ))
}

pub async fn post_student_registration(
    State(state): State<BibliotecaState>,
    headers: HeaderMap,
    Form(draft): Form<StudentRegistrationDraft>,
) -> Markup {
    let mut form = RegistrationForm::from_draft(draft);

    let (missing, shown_notice) = match form.on_submit(state.students_api()).await {
        SubmitOutcome::Blocked(missing) => (missing, None),
        SubmitOutcome::Notified(notice) => (MissingFields::empty(), Some(notice)),
    };

    let markup = internal_render_registration_form(form.draft(), missing, shown_notice.as_ref());
    if is_htmx(&headers) {
        markup
    } else {
        state.render(markup)
    }
}

pub fn internal_render_registration_form(
    draft: &StudentRegistrationDraft,
    missing: MissingFields,
    shown_notice: Option<&Notice>,
) -> Markup {
    html! {
        div id="registration_form" class="bg-gray-800 shadow-md rounded px-8 pt-6 pb-8 mb-4 w-full max-w-sm" {
            @if let Some(shown_notice) = shown_notice {
                (notice(shown_notice))
            }
            form method="post" action="/cadastro-aluno" hx-post="/cadastro-aluno" hx-target="#registration_form" hx-swap="outerHTML" {
                (subtitle("Cadastro de Aluno"))
                @for field in DraftField::ALL {
                    (simple_form_element(field.input_name(), field.label(), true, Some(field.input_type()), Some(draft.get(field)), missing.contains(field.as_missing())))
                }
                (form_submit_button(Some("Cadastrar")))
            }
        }
    }
}
