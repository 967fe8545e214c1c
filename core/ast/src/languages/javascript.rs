//! JavaScript with JSX, as parsed by `tree-sitter-javascript`.

ecma_kinds! {
    language: JavaScript;
    with: [jsx];
}
