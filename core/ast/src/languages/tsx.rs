//! TypeScript with JSX, as parsed by the `tsx` dialect of
//! `tree-sitter-typescript`.

ecma_kinds! {
    language: Tsx;
    with: [jsx, typescript];
}
