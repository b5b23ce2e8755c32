use tera::{Context, Tera};

use crate::error::BotError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Template {
    Start,
    Help,
    UnknownCommand,
    FormAdd,
    FormAdded,
    FormUpdate,
    FormUpdated,
    QuestionAsk,
    QuestionAsked,
}

impl Template {
    pub fn name(self) -> &'static str {
        match self {
            Template::Start => "start.html",
            Template::Help => "help.html",
            Template::UnknownCommand => "unknown_command.html",
            Template::FormAdd => "form_add.html",
            Template::FormAdded => "form_added.html",
            Template::FormUpdate => "form_update.html",
            Template::FormUpdated => "form_updated.html",
            Template::QuestionAsk => "question_ask.html",
            Template::QuestionAsked => "question_asked.html",
        }
    }
}

/// Reply copy, rendered from the templates compiled into the binary.
pub struct Texts {
    tera: Tera,
}

impl Texts {
    pub fn new() -> Result<Self, BotError> {
        let mut tera = Tera::default();
        tera.add_raw_templates(vec![
            ("start.html", include_str!("../templates/start.html")),
            ("help.html", include_str!("../templates/help.html")),
            (
                "unknown_command.html",
                include_str!("../templates/unknown_command.html"),
            ),
            ("form_add.html", include_str!("../templates/form_add.html")),
            ("form_added.html", include_str!("../templates/form_added.html")),
            ("form_update.html", include_str!("../templates/form_update.html")),
            (
                "form_updated.html",
                include_str!("../templates/form_updated.html"),
            ),
            (
                "question_ask.html",
                include_str!("../templates/question_ask.html"),
            ),
            (
                "question_asked.html",
                include_str!("../templates/question_asked.html"),
            ),
        ])?;
        Ok(Self { tera })
    }

    pub fn render(&self, template: Template) -> Result<String, BotError> {
        self.render_with(template, &Context::new())
    }

    pub fn render_with(&self, template: Template, context: &Context) -> Result<String, BotError> {
        Ok(self.tera.render(template.name(), context)?)
    }

    pub fn start(&self, display_name: &str) -> Result<String, BotError> {
        let mut context = Context::new();
        context.insert("display_name", display_name);
        self.render_with(Template::Start, &context)
    }
}
