fn main() {
    if let Err(e) = pcdt_lib::run() {
        eprintln!("Erro: {e}");
        std::process::exit(1);
    }
}
