#[cfg(test)]
mod tests;

mod codegen;

pub use codegen::CodeGenerator;
