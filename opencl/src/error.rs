use std::fmt;

pub type Result<T> = std::result::Result<T, Error>;

/// A non-success status code from the device runtime, tagged with the step
/// that produced it. `CL_SUCCESS` and `CLBlastSuccess` are both zero.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Error {
    pub step: &'static str,
    pub code: i32,
}

impl Error {
    #[inline]
    pub fn check(code: i32, step: &'static str) -> Result<()> {
        if code == 0 {
            Ok(())
        } else {
            Err(Self { step, code })
        }
    }

    /// Process exit status for a failed run.
    #[inline]
    pub fn exit_code(&self) -> i32 {
        self.code
    }
}

impl fmt::Display for Error {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Error: {} ({})", self.step, self.code)
    }
}

impl std::error::Error for Error {}

#[test]
fn test_display() {
    let err = Error {
        step: "Getting device ID",
        code: -1,
    };
    assert_eq!(err.to_string(), "Error: Getting device ID (-1)");
    assert_eq!(err.exit_code(), -1);
    assert_eq!(Error::check(0, "anything"), Ok(()));
}
