//! Framebuffer flushing

use darkroom_core::traits::DisplayError;

/// A buffered draw target whose content must be pushed to the panel
pub trait FlushTarget {
    /// Send the framebuffer to the hardware
    fn flush_frame(&mut self) -> Result<(), DisplayError>;
}

#[cfg(feature = "ssd1306")]
mod ssd1306_impl {
    use super::FlushTarget;
    use darkroom_core::traits::DisplayError;
    use display_interface::WriteOnlyDataCommand;
    use ssd1306::mode::BufferedGraphicsMode;
    use ssd1306::size::DisplaySize;
    use ssd1306::Ssd1306;

    impl<DI, SIZE> FlushTarget for Ssd1306<DI, SIZE, BufferedGraphicsMode<SIZE>>
    where
        DI: WriteOnlyDataCommand,
        SIZE: DisplaySize,
    {
        fn flush_frame(&mut self) -> Result<(), DisplayError> {
            self.flush().map_err(|_| DisplayError::Communication)
        }
    }
}
