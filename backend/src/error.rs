pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("SDL error: {0}")]
    Sdl(String),
    #[error("error while building OpenGL window: {0}")]
    WindowBuild(#[from] sdl2::video::WindowBuildError),
    #[error("{stage} shader compilation error: {log}")]
    ShaderCompile { stage: &'static str, log: String },
    #[error("program link error: {0}")]
    ProgramLink(String),
    #[error("uniform '{0}' does not correspond to an active uniform variable in program")]
    MissingUniform(String),
    #[error("OpenGL error: 0x{0:04x}")]
    Gl(u32),
}
