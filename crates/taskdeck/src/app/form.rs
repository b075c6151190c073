/*
[INPUT]:  Text edits for the four task fields
[OUTPUT]: Staging record for a task create request
[POS]:    Application layer - task form state
[UPDATE]: When task fields or form editing keys change
*/

use taskdeck_adapter::TaskFormData;
use tui_input::{Input, InputRequest};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormField {
    #[default]
    Id,
    Name,
    Owner,
    Command,
}

impl FormField {
    pub const ALL: [FormField; 4] = [
        FormField::Id,
        FormField::Name,
        FormField::Owner,
        FormField::Command,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FormField::Id => "Task ID",
            FormField::Name => "Task Name",
            FormField::Owner => "Owner",
            FormField::Command => "Command",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            FormField::Id => "Enter task ID",
            FormField::Name => "Enter task name",
            FormField::Owner => "Enter owner name",
            FormField::Command => "Enter command",
        }
    }

    pub fn next(self) -> Self {
        match self {
            FormField::Id => FormField::Name,
            FormField::Name => FormField::Owner,
            FormField::Owner => FormField::Command,
            FormField::Command => FormField::Id,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            FormField::Id => FormField::Command,
            FormField::Name => FormField::Id,
            FormField::Owner => FormField::Name,
            FormField::Command => FormField::Owner,
        }
    }
}

/// Draft task being typed by the user.
///
/// Values are kept untouched until [`TaskForm::reset`], so a failed create
/// can be retried without retyping.
#[derive(Debug, Default, Clone)]
pub struct TaskForm {
    id: Input,
    name: Input,
    owner: Input,
    command: Input,
    focus: FormField,
}

impl TaskForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn focus(&self) -> FormField {
        self.focus
    }

    pub fn set_focus(&mut self, field: FormField) {
        self.focus = field;
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    pub fn input(&self, field: FormField) -> &Input {
        match field {
            FormField::Id => &self.id,
            FormField::Name => &self.name,
            FormField::Owner => &self.owner,
            FormField::Command => &self.command,
        }
    }

    fn input_mut(&mut self, field: FormField) -> &mut Input {
        match field {
            FormField::Id => &mut self.id,
            FormField::Name => &mut self.name,
            FormField::Owner => &mut self.owner,
            FormField::Command => &mut self.command,
        }
    }

    pub fn value(&self, field: FormField) -> &str {
        self.input(field).value()
    }

    pub fn set_value(&mut self, field: FormField, value: impl Into<String>) {
        *self.input_mut(field) = Input::new(value.into());
    }

    /// Apply an edit to the focused field
    pub fn edit(&mut self, request: InputRequest) {
        let field = self.focus;
        self.input_mut(field).handle(request);
    }

    /// First field left blank, in display order
    pub fn missing_field(&self) -> Option<FormField> {
        FormField::ALL
            .into_iter()
            .find(|field| self.value(*field).trim().is_empty())
    }

    pub fn is_complete(&self) -> bool {
        self.missing_field().is_none()
    }

    pub fn data(&self) -> TaskFormData {
        TaskFormData::new(
            self.value(FormField::Id),
            self.value(FormField::Name),
            self.value(FormField::Owner),
            self.value(FormField::Command),
        )
    }

    pub fn reset(&mut self) {
        for field in FormField::ALL {
            self.input_mut(field).reset();
        }
        self.focus = FormField::Id;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_text(form: &mut TaskForm, text: &str) {
        for ch in text.chars() {
            form.edit(InputRequest::InsertChar(ch));
        }
    }

    #[test]
    fn typing_goes_to_focused_field() {
        let mut form = TaskForm::new();
        type_text(&mut form, "1");
        form.focus_next();
        type_text(&mut form, "Build");
        form.focus_next();
        type_text(&mut form, "alice");
        form.focus_next();
        type_text(&mut form, "make");

        assert_eq!(form.data(), TaskFormData::new("1", "Build", "alice", "make"));
        assert!(form.is_complete());
    }

    #[test]
    fn focus_wraps_both_ways() {
        let mut form = TaskForm::new();
        form.focus_prev();
        assert_eq!(form.focus(), FormField::Command);
        form.focus_next();
        assert_eq!(form.focus(), FormField::Id);
    }

    #[test]
    fn backspace_edits_only_focused_field() {
        let mut form = TaskForm::new();
        form.set_value(FormField::Name, "Build");
        form.set_focus(FormField::Name);
        form.edit(InputRequest::DeletePrevChar);
        assert_eq!(form.value(FormField::Name), "Buil");
        assert_eq!(form.value(FormField::Id), "");
    }

    #[test]
    fn missing_field_reports_first_blank() {
        let mut form = TaskForm::new();
        assert_eq!(form.missing_field(), Some(FormField::Id));

        form.set_value(FormField::Id, "1");
        form.set_value(FormField::Name, "   ");
        form.set_value(FormField::Owner, "alice");
        form.set_value(FormField::Command, "make");
        assert_eq!(form.missing_field(), Some(FormField::Name));
        assert!(!form.is_complete());
    }

    #[test]
    fn reset_clears_values_and_focus() {
        let mut form = TaskForm::new();
        form.set_value(FormField::Id, "1");
        form.set_value(FormField::Command, "make");
        form.set_focus(FormField::Owner);

        form.reset();

        assert_eq!(form.data(), TaskFormData::default());
        assert_eq!(form.focus(), FormField::Id);
    }
}
