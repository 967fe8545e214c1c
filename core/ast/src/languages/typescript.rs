//! TypeScript, as parsed by the `typescript` dialect of
//! `tree-sitter-typescript`.

ecma_kinds! {
    language: TypeScript;
    with: [typescript];
}
