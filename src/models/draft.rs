pub const TITLE_REQUIRED_MSG: &str = "A Post Title is required";
pub const SUBREDDIT_REQUIRED_MSG: &str = "A subreddit is required";

/// The in-progress, not-yet-submitted values of the post form.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PostDraft {
    pub title: String,
    pub body: String,
    pub image: String,
    pub subreddit: String,
}

impl PostDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Required-field check run at submit time. Body and image are free-form
    /// optional text and are never validated.
    pub fn validate(&self) -> ValidationErrors {
        ValidationErrors {
            title_required: self.title.is_empty(),
            subreddit_required: self.subreddit.is_empty(),
        }
    }

    /// Reset all four fields after a successful submission.
    pub fn clear(&mut self) {
        self.title.clear();
        self.body.clear();
        self.image.clear();
        self.subreddit.clear();
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ValidationErrors {
    pub title_required: bool,
    pub subreddit_required: bool,
}

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        !self.title_required && !self.subreddit_required
    }

    pub fn messages(&self) -> Vec<&'static str> {
        let mut msgs = Vec::new();
        if self.title_required {
            msgs.push(TITLE_REQUIRED_MSG);
        }
        if self.subreddit_required {
            msgs.push(SUBREDDIT_REQUIRED_MSG);
        }
        msgs
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Title,
    Body,
    Subreddit,
    Image,
}

/// Which fields are on screen for the current draft. The title is always
/// shown; everything else appears once a title has been entered, and the
/// image URL field additionally requires the image box toggle.
pub fn visible_fields(draft: &PostDraft, image_box_open: bool) -> Vec<Field> {
    let mut fields = vec![Field::Title];
    if !draft.title.is_empty() {
        fields.push(Field::Body);
        fields.push(Field::Subreddit);
        if image_box_open {
            fields.push(Field::Image);
        }
    }
    fields
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_draft_fails_both_required_checks() {
        let errors = PostDraft::new().validate();
        assert!(errors.title_required);
        assert!(errors.subreddit_required);
        assert_eq!(
            errors.messages(),
            vec![TITLE_REQUIRED_MSG, SUBREDDIT_REQUIRED_MSG]
        );
    }

    #[test]
    fn missing_subreddit_only_flags_subreddit() {
        let draft = PostDraft {
            title: "Hello".into(),
            ..PostDraft::default()
        };
        let errors = draft.validate();
        assert!(!errors.title_required);
        assert!(errors.subreddit_required);
        assert_eq!(errors.messages(), vec![SUBREDDIT_REQUIRED_MSG]);
    }

    #[test]
    fn title_and_subreddit_satisfy_validation() {
        let draft = PostDraft {
            title: "Hello".into(),
            subreddit: "rust".into(),
            ..PostDraft::default()
        };
        assert!(draft.validate().is_empty());
    }

    #[test]
    fn only_title_visible_until_typed() {
        let draft = PostDraft::new();
        assert_eq!(visible_fields(&draft, false), vec![Field::Title]);
        // Toggling the image box with no title still shows nothing extra
        assert_eq!(visible_fields(&draft, true), vec![Field::Title]);
    }

    #[test]
    fn body_and_subreddit_appear_with_title() {
        let draft = PostDraft {
            title: "x".into(),
            ..PostDraft::default()
        };
        assert_eq!(
            visible_fields(&draft, false),
            vec![Field::Title, Field::Body, Field::Subreddit]
        );
    }

    #[test]
    fn image_field_needs_both_title_and_toggle() {
        let draft = PostDraft {
            title: "x".into(),
            ..PostDraft::default()
        };
        assert_eq!(
            visible_fields(&draft, true),
            vec![Field::Title, Field::Body, Field::Subreddit, Field::Image]
        );
    }

    #[test]
    fn clear_resets_all_four_fields() {
        let mut draft = PostDraft {
            title: "t".into(),
            body: "b".into(),
            image: "i".into(),
            subreddit: "s".into(),
        };
        draft.clear();
        assert_eq!(draft, PostDraft::default());
    }
}
