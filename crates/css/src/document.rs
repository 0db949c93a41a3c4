//! The document capabilities the substitution policies are written against.

use css_syntax::{Declaration, Stylesheet, ValueError};

/// A stylesheet-like document that can host a type scale.
pub trait ScaleDocument {
    /// Replace every directive comment that sits inside a rule with `declarations`,
    /// in order. Returns how many comments were replaced.
    fn replace_directives(&mut self, directive: &str, declarations: &[Declaration]) -> usize;

    /// Visit every declaration in document order, stopping at the first error.
    ///
    /// # Errors
    /// Returns the first error produced by `visit`.
    fn try_for_each_declaration(
        &mut self,
        visit: &mut dyn FnMut(&mut Declaration) -> Result<(), ValueError>,
    ) -> Result<(), ValueError>;
}

impl ScaleDocument for Stylesheet {
    fn replace_directives(&mut self, directive: &str, declarations: &[Declaration]) -> usize {
        self.replace_rule_comments(directive, declarations)
    }

    fn try_for_each_declaration(
        &mut self,
        visit: &mut dyn FnMut(&mut Declaration) -> Result<(), ValueError>,
    ) -> Result<(), ValueError> {
        self.try_for_each_declaration_mut(visit)
    }
}
