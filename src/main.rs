fn main() {
    widgetry::start();
}
