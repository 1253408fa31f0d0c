use std::io;

fn main() {
    chess_engine::logging::init();
    let stdin = io::stdin();
    let controller = chess_engine::uci::new_controller();
    chess_engine::uci::run(stdin.lock(), controller);
}
