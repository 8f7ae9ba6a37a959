use toggle_mocks::App;
use tracing::Level;

fn main() {
    dioxus::logger::init(Level::DEBUG).expect("failed to init logger");
    dioxus::launch(App);
}
