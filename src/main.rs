/// Binary entrypoint for the `passmith` executable.
///
/// Keeps the binary thin. All business logic lives in the `passmith_lib` crate
/// so unit tests can import library functions directly.
fn main() {
    passmith_lib::run();
}
