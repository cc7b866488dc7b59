pub mod use_cases;

#[cfg(test)]
mod test_support;

pub use use_cases::{
    authenticate::{AuthenticateError, AuthenticateUseCase},
    login::{LoginError, LoginResponse, LoginUseCase},
    register::{RegisterError, RegisterUseCase},
};
