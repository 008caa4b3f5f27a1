use trivia_quiz::QuizApp;

fn main() -> eframe::Result<()> {
    pretty_env_logger::init();

    let options = eframe::NativeOptions::default();
    eframe::run_native(
        "Quiz de Rust",
        options,
        Box::new(|_cc| Ok(Box::new(QuizApp::new()))),
    )
}
