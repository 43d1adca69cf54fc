fn main() {
    backoffice_frontend::run();
}
