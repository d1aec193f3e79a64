fn main() {
    login_frontend::start();
}
