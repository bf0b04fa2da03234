use crate::models::draft::{visible_fields, Field, PostDraft, ValidationErrors};
use crate::views::toast::Toast;

/// View state for the post form: the draft plus focus, the image box toggle,
/// the last validation result and the current toast.
pub struct FormState {
    pub draft: PostDraft,
    pub image_box_open: bool,
    pub errors: ValidationErrors,
    pub toast: Option<Toast>,
    focus: usize,
}

impl Default for FormState {
    fn default() -> Self {
        Self::new()
    }
}

impl FormState {
    pub fn new() -> Self {
        Self {
            draft: PostDraft::new(),
            image_box_open: false,
            errors: ValidationErrors::default(),
            toast: None,
            focus: 0,
        }
    }

    pub fn visible_fields(&self) -> Vec<Field> {
        visible_fields(&self.draft, self.image_box_open)
    }

    pub fn focused(&self) -> Field {
        let fields = self.visible_fields();
        fields[self.focus.min(fields.len() - 1)]
    }

    pub fn focus_next(&mut self) {
        let last = self.visible_fields().len() - 1;
        if self.focus < last {
            self.focus += 1;
        }
    }

    pub fn focus_previous(&mut self) {
        if self.focus > 0 {
            self.focus -= 1;
        }
    }

    /// Flip the image box visibility. The image value itself is kept, so
    /// closing and reopening the box restores what was typed.
    pub fn toggle_image_box(&mut self) {
        self.image_box_open = !self.image_box_open;
        self.sync_focus();
    }

    pub fn insert_char(&mut self, c: char, title_enabled: bool) {
        match self.focused() {
            Field::Title if !title_enabled => {}
            Field::Title => self.draft.title.push(c),
            Field::Body => self.draft.body.push(c),
            Field::Subreddit => self.draft.subreddit.push(c),
            Field::Image => self.draft.image.push(c),
        }
        self.sync_focus();
    }

    pub fn backspace(&mut self, title_enabled: bool) {
        match self.focused() {
            Field::Title if !title_enabled => {}
            Field::Title => {
                self.draft.title.pop();
            }
            Field::Body => {
                self.draft.body.pop();
            }
            Field::Subreddit => {
                self.draft.subreddit.pop();
            }
            Field::Image => {
                self.draft.image.pop();
            }
        }
        self.sync_focus();
    }

    /// Re-clamp focus after anything that can shrink the visible field list,
    /// e.g. the title being deleted or the image box closing.
    pub fn sync_focus(&mut self) {
        let last = self.visible_fields().len() - 1;
        if self.focus > last {
            self.focus = last;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_title(form: &mut FormState, text: &str) {
        for c in text.chars() {
            form.insert_char(c, true);
        }
    }

    #[test]
    fn typing_a_title_reveals_more_fields() {
        let mut form = FormState::new();
        assert_eq!(form.visible_fields(), vec![Field::Title]);
        type_title(&mut form, "Hello");
        assert_eq!(
            form.visible_fields(),
            vec![Field::Title, Field::Body, Field::Subreddit]
        );
    }

    #[test]
    fn focus_stops_at_last_visible_field() {
        let mut form = FormState::new();
        type_title(&mut form, "Hello");
        form.focus_next();
        form.focus_next();
        form.focus_next();
        form.focus_next();
        assert_eq!(form.focused(), Field::Subreddit);
    }

    #[test]
    fn deleting_the_title_hides_other_fields() {
        let mut form = FormState::new();
        type_title(&mut form, "H");
        form.backspace(true);
        assert_eq!(form.visible_fields(), vec![Field::Title]);
        assert_eq!(form.focused(), Field::Title);
    }

    #[test]
    fn closing_the_image_box_pulls_focus_back() {
        let mut form = FormState::new();
        type_title(&mut form, "Hello");
        form.toggle_image_box();
        form.focus_next();
        form.focus_next();
        form.focus_next();
        assert_eq!(form.focused(), Field::Image);
        form.toggle_image_box();
        assert_eq!(form.focused(), Field::Subreddit);
    }

    #[test]
    fn toggle_keeps_the_image_value() {
        let mut form = FormState::new();
        type_title(&mut form, "Hello");
        form.toggle_image_box();
        form.focus_next();
        form.focus_next();
        form.focus_next();
        assert_eq!(form.focused(), Field::Image);
        form.insert_char('x', true);
        assert_eq!(form.draft.image, "x");

        form.toggle_image_box();
        assert_eq!(form.visible_fields().len(), 3);
        assert_eq!(form.draft.image, "x");

        form.toggle_image_box();
        assert_eq!(form.draft.image, "x");
    }

    #[test]
    fn signed_out_title_input_is_inert() {
        let mut form = FormState::new();
        form.insert_char('a', false);
        assert!(form.draft.title.is_empty());
        form.backspace(false);
        assert!(form.draft.title.is_empty());
    }
}
