use bitflags::bitflags;
use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum DraftField {
    Nome,
    Matricula,
    DataNascimento,
}

impl DraftField {
    pub const ALL: [Self; 3] = [Self::Nome, Self::Matricula, Self::DataNascimento];

    /// The `name` of the matching `input`, which is also the JSON key sent upstream.
    pub const fn input_name(self) -> &'static str {
        match self {
            Self::Nome => "nome",
            Self::Matricula => "matricula",
            Self::DataNascimento => "dataNascimento",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Nome => "Nome:",
            Self::Matricula => "Matrícula:",
            Self::DataNascimento => "Data de Nascimento:",
        }
    }

    pub const fn input_type(self) -> &'static str {
        match self {
            Self::Nome | Self::Matricula => "text",
            Self::DataNascimento => "date",
        }
    }

    pub const fn as_missing(self) -> MissingFields {
        match self {
            Self::Nome => MissingFields::NOME,
            Self::Matricula => MissingFields::MATRICULA,
            Self::DataNascimento => MissingFields::DATA_NASCIMENTO,
        }
    }
}

bitflags! {
    #[derive(Copy, Clone, Debug, Eq, PartialEq)]
    pub struct MissingFields: u8 {
        const NOME =            0b0000_0001;
        const MATRICULA =       0b0000_0010;
        const DATA_NASCIMENTO = 0b0000_0100;
    }
}

/// What the user has typed so far, exactly as the inputs hold it.
#[derive(Deserialize, Default, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct StudentRegistrationDraft {
    pub nome: String,
    pub matricula: String,
    pub data_nascimento: String,
}

impl StudentRegistrationDraft {
    pub fn get(&self, field: DraftField) -> &str {
        match field {
            DraftField::Nome => &self.nome,
            DraftField::Matricula => &self.matricula,
            DraftField::DataNascimento => &self.data_nascimento,
        }
    }

    pub fn set(&mut self, field: DraftField, value: impl Into<String>) {
        let value = value.into();
        match field {
            DraftField::Nome => self.nome = value,
            DraftField::Matricula => self.matricula = value,
            DraftField::DataNascimento => self.data_nascimento = value,
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn missing_fields(&self) -> MissingFields {
        DraftField::ALL
            .into_iter()
            .filter(|field| self.get(*field).is_empty())
            .fold(MissingFields::empty(), |acc, field| acc | field.as_missing())
    }

    /// Builds the upstream payload, every field copied verbatim.
    pub fn to_new_student(&self) -> NewStudent {
        NewStudent {
            nome: self.nome.clone(),
            matricula: self.matricula.clone(),
            data_nascimento: self.data_nascimento.clone(),
        }
    }
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NewStudent {
    pub nome: String,
    pub matricula: String,
    pub data_nascimento: String,
}
