pub mod naming;
pub mod scanner;

pub use naming::FilenameTokens;
pub use scanner::Scanner;
