//! The magic ball's canned responses.

/// A compile-time checked non-empty static string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NonEmptyStaticStr(&'static str);

impl NonEmptyStaticStr {
    #[must_use]
    pub const fn new(value: &'static str) -> Self {
        assert!(!value.is_empty(), "NonEmptyStaticStr must not be empty");
        Self(value)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        self.0
    }
}

/// Responses in display order. Selection is uniform over this list.
pub const ANSWERS: [NonEmptyStaticStr; 8] = [
    NonEmptyStaticStr::new("It is certain."),
    NonEmptyStaticStr::new("Hmmm, not sure. Ask again later."),
    NonEmptyStaticStr::new("No."),
    NonEmptyStaticStr::new("Doubtful."),
    NonEmptyStaticStr::new("Outlook does not look so good."),
    NonEmptyStaticStr::new("Yes."),
    NonEmptyStaticStr::new("Is that what you really want to ask?"),
    NonEmptyStaticStr::new("It is decidedly so."),
];
