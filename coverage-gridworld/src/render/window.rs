//! Window presenting rendered frames.
use super::Frame;
use anyhow::Result;

#[cfg(feature = "window")]
mod imp {
    use super::{Frame, Result};
    use crate::GridError;
    use minifb::{Window, WindowOptions};

    pub(crate) struct Surface {
        window: Window,
    }

    impl Surface {
        pub fn open(title: &str, width: usize, height: usize) -> Result<Self> {
            let window = Window::new(title, width, height, WindowOptions::default())
                .map_err(|e| {
                    GridError::RenderDependencyUnavailableError(format!(
                        "cannot open a window: {}",
                        e
                    ))
                })?;
            Ok(Self { window })
        }

        pub fn present(&mut self, frame: &Frame) -> Result<()> {
            self.window
                .update_with_buffer(frame.pixels(), frame.width(), frame.height())
                .map_err(|e| {
                    GridError::RenderDependencyUnavailableError(format!(
                        "cannot draw to the window: {}",
                        e
                    ))
                })?;
            Ok(())
        }
    }
}

#[cfg(not(feature = "window"))]
mod imp {
    use super::{Frame, Result};
    use crate::GridError;

    pub(crate) struct Surface;

    impl Surface {
        pub fn open(_title: &str, _width: usize, _height: usize) -> Result<Self> {
            Err(GridError::RenderDependencyUnavailableError(
                "interactive rendering needs a window, \
                 build coverage-gridworld with the `window` feature"
                    .to_string(),
            )
            .into())
        }

        pub fn present(&mut self, _frame: &Frame) -> Result<()> {
            Ok(())
        }
    }
}

pub(crate) use imp::Surface;
