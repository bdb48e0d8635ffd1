fn main() {
    runtime_compat::run_cli();
}
