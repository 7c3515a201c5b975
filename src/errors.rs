// Create the Error, ErrorKind, ResultExt, and Result types
// Result is a typedef of std `Result` with the error type our own `Error`
// Defines the From conversions that let try! and ? work for our `Error`.
// ResultExt adds the `chain_err` trait method.
use error_chain::*;

error_chain! {
    errors {
        /// A maze generation method name that the builder does not know.
        /// Fatal to the build call; no partial grid is handed back.
        UnknownGenerationMethod(method: String) {
            description("unknown maze generation method")
            display("unknown maze generation method: '{}'", method)
        }
    }
}
