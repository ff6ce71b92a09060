/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - node: The Node sum type, structural equality and tree printing
pub mod node;
