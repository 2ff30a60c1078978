//! Macros for ergonomic automaton construction.

/// Build an automaton from a transition table.
///
/// Expands to an [`AutomatonBuilder`](crate::builder::AutomatonBuilder) chain
/// and evaluates to `Result<Automaton<_, _>, BuildError>`.
///
/// # Example
///
/// ```
/// use nerode::automaton;
///
/// let nfa = automaton! {
///     states: ["p", "q"],
///     alphabet: ['a', 'b'],
///     start: "p",
///     accepting: ["q"],
///     transitions: {
///         ("p", 'a') => ["p", "q"],
///         ("q", 'b') => ["p"],
///     }
/// }
/// .unwrap();
///
/// assert!(!nfa.is_deterministic());
/// ```
#[macro_export]
macro_rules! automaton {
    (
        states: [$($state:expr),* $(,)?],
        alphabet: [$($symbol:expr),* $(,)?],
        start: $start:expr,
        accepting: [$($accepting:expr),* $(,)?],
        transitions: {
            $(
                ($from:expr, $on:expr) => [$($to:expr),* $(,)?]
            ),* $(,)?
        } $(,)?
    ) => {{
        let builder = $crate::builder::AutomatonBuilder::new()
            $(.state($state))*
            $(.symbol($symbol))*
            .start($start)
            $(.accepting($accepting))*;
        $(
            let builder = builder.transitions($from, $on, [$($to),*]);
        )*
        builder.build()
    }};
}
