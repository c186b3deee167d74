/// The variable environment consulted during evaluation.
///
/// An `Environment` is an ordered list of name/value bindings. Lookups scan
/// from the oldest binding forward and always hand out copies, so a caller
/// can never hold a reference into the environment.
pub mod environment;
/// The evaluator reduces expression trees to values.
///
/// The evaluator walks the tree bottom-up and applies the arithmetic rules of
/// each operator according to the runtime kinds of its operands, checking
/// matrix shapes along the way.
///
/// # Responsibilities
/// - Reduces every tree to a leaf value: scalar, complex, vector or matrix.
/// - Resolves variable references against the environment.
/// - Reports type mismatches, shape mismatches and unbound variables.
pub mod evaluator;
/// Resource limits shared by the parser and the evaluator.
pub mod limits;
/// The parser turns the bracketed textual notation into an AST.
///
/// There is no separate tokenizer: the parser walks the whitespace-free text
/// directly with a byte cursor, one tagged node at a time, and recurses into
/// the operands of operator nodes.
///
/// # Responsibilities
/// - Recognizes the node tags and their payload grammars.
/// - Converts numeric literals with `strtod`-like prefix semantics.
/// - Reports the offset of the first mismatch.
pub mod parser;
/// Canonical textual form of expression trees.
///
/// The rendering uses the same tagged notation the parser accepts, so any
/// finite leaf value renders to text that parses back to an equal value.
pub mod render;
/// The value module defines the payloads carried by leaf nodes.
pub mod value;
