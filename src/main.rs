fn main() {
    feis_board_wasm::boot();
}
