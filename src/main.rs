fn main() {
    portal_empresas::run();
}
