fn main() {
    cslschedule_frontend::start();
}
