use crate::{
    data::student::{DraftField, MissingFields, StudentRegistrationDraft},
    students_api::StudentsApi,
};

pub const SUCCESS_MESSAGE: &str = "Aluno cadastrado com sucesso!";
pub const FAILURE_PREFIX: &str = "Erro ao cadastrar aluno: ";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Notice {
    Success,
    Failure(String),
}

impl Notice {
    pub fn message(&self) -> String {
        match self {
            Self::Success => SUCCESS_MESSAGE.to_string(),
            Self::Failure(msg) => format!("{FAILURE_PREFIX}{msg}"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// A required field was empty, nothing was sent.
    Blocked(MissingFields),
    Notified(Notice),
}

/// The registration form's state: the draft being edited.
#[derive(Clone, Debug, Default)]
pub struct RegistrationForm {
    draft: StudentRegistrationDraft,
}

impl RegistrationForm {
    pub const fn from_draft(draft: StudentRegistrationDraft) -> Self {
        Self { draft }
    }

    pub const fn draft(&self) -> &StudentRegistrationDraft {
        &self.draft
    }

    pub fn on_field_change(&mut self, field: DraftField, value: impl Into<String>) {
        self.draft.set(field, value);
    }

    /// Submits the draft, sending at most one request upstream.
    ///
    /// Any upstream failure becomes a [`Notice::Failure`] and leaves the draft alone so it can
    /// be resubmitted; acceptance clears the draft.
    pub async fn on_submit(&mut self, api: &StudentsApi) -> SubmitOutcome {
        let missing = self.draft.missing_fields();
        if !missing.is_empty() {
            debug!(?missing, "Blocked submission with empty required fields");
            return SubmitOutcome::Blocked(missing);
        }

        let student = self.draft.to_new_student();

        match api.register(&student).await {
            Ok(()) => {
                info!(matricula = %student.matricula, "Registered student");
                self.draft.clear();
                SubmitOutcome::Notified(Notice::Success)
            }
            Err(e) => {
                warn!(?e, "Student registration failed");
                SubmitOutcome::Notified(Notice::Failure(e.to_string()))
            }
        }
    }
}
