/// Configuration of a [`Grammar`][crate::Grammar].
#[derive(Clone, Debug)]
#[non_exhaustive]
pub struct Config {
    /// How deeply comments may be nested within comments. (Default: `64`)
    ///
    /// A comment nested deeper than this is rejected with a [hard][mailgram::FailKind::Hard]
    /// failure. This bounds the recursion depth of the parser. Values above
    /// [`MAX_COMMENT_DEPTH`][Self::MAX_COMMENT_DEPTH] are treated as that ceiling.
    pub max_comment_depth: usize,
    /// When set, `angle-addr` also accepts the obsolete form with a leading source route, as in
    /// `<@relay.example:user@example.com>`. (Default: `false`)
    pub obsolete_routes: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_comment_depth: 64,
            obsolete_routes: false,
        }
    }
}

impl Config {
    /// Highest comment nesting depth a [`Grammar`][crate::Grammar] allows, whatever
    /// [`max_comment_depth`][Self#structfield.max_comment_depth] is set to.
    ///
    /// Every level of nesting is a level of recursion, so this keeps deeply nested input within
    /// the default stack size of a thread.
    pub const MAX_COMMENT_DEPTH: usize = 128;

    #[inline]
    /// Sets the [`max_comment_depth`][Self#structfield.max_comment_depth] field.
    pub fn max_comment_depth(mut self, value: usize) -> Self {
        self.max_comment_depth = value;
        self
    }

    #[inline]
    /// Sets the [`obsolete_routes`][Self#structfield.obsolete_routes] field.
    pub fn obsolete_routes(mut self, value: bool) -> Self {
        self.obsolete_routes = value;
        self
    }
}
