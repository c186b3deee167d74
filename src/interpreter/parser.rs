/// Parser entry points and the cursor that drives them.
///
/// Contains `parse`, the `Parser` cursor and the tag dispatch that every
/// node goes through.
pub mod core;
/// Leaf payload grammars.
///
/// Each function here receives the payload text of one leaf node, which is
/// everything between the tag's comma and the node's closing `>`, and turns
/// it into a value.
pub mod literal;
/// Operator node grammar.
///
/// Operator nodes hold two complete nodes separated by a comma, so they are
/// parsed by recursing into the cursor.
pub mod operator;

mod utils;
