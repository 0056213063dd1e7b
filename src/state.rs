use crate::{
    config::RuntimeConfiguration, error::BibliotecaResult, maud_conveniences::title,
    students_api::StudentsApi,
};
use maud::{DOCTYPE, Markup, html};

#[derive(Clone, Debug)]
pub struct BibliotecaState {
    students_api: StudentsApi,
}

impl BibliotecaState {
    pub fn new(config: &RuntimeConfiguration) -> BibliotecaResult<Self> {
        Ok(Self {
            students_api: StudentsApi::new(config.api_config())?,
        })
    }

    pub const fn students_api(&self) -> &StudentsApi {
        &self.students_api
    }

    /// Wraps a page body in the shell: title and the navigation header.
    #[allow(clippy::unused_self, clippy::needless_pass_by_value)] //to allow direct html! usage
    pub fn render(&self, markup: Markup) -> Markup {
        html! {
            (DOCTYPE)
            html lang="pt-BR" {
                head {
                    meta charset="UTF-8" {}
                    meta name="viewport" content="width=device-width, initial-scale=1.0" {}
                    script src="https://unpkg.com/htmx.org@2.0.4" integrity="sha384-HGfztofotfshcF7+8n44JQL2oJmowVChPTg48S+jvZoztPfvwD79OC/LTtG6dMp+" crossorigin="anonymous" {}
                    script src="https://cdn.jsdelivr.net/npm/@tailwindcss/browser@4" {}
                    title { "Sistema da Biblioteca" }
                }
                body class="bg-gray-900 min-h-screen p-5 text-white" {
                    (title("Sistema da Biblioteca"))
                    nav class="mb-6" {
                        a href="/cadastro-aluno" class="text-blue-400 hover:text-blue-200 underline" {"Cadastrar Aluno"}
                    }
                    (markup)
                }
            }
        }
    }
}
