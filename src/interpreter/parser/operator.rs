use crate::{
    ast::{Expr, Operator},
    interpreter::parser::core::{ParseResult, Parser},
};

impl Parser<'_> {
    /// Parses the payload of an operator node: two nodes separated by a
    /// comma, followed by the `>` that closes the operator node.
    ///
    /// The cursor must be just past the tag's comma.
    ///
    /// Grammar: `suma := expr "," expr ">"` (and likewise for `multesc`)
    ///
    /// # Errors
    /// Propagates any error from either operand, and fails with
    /// `ParseError::ExpectedChar` if the `,` or the `>` is missing.
    pub(in crate::interpreter::parser) fn parse_binary(&mut self,
                                                       op: Operator)
                                                       -> ParseResult<Expr> {
        let left = self.parse_at()?;
        self.expect(',')?;
        let right = self.parse_at()?;
        self.expect('>')?;

        Ok(Expr::BinaryOp { left: Box::new(left),
                            op,
                            right: Box::new(right) })
    }
}
