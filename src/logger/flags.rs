//! Feature-flag bitset.

bitflags::bitflags! {
    /// Independent toggles controlling debug visibility and color emission.
    ///
    /// Operations on a [`Logger`](super::Logger) keep unknown bits, so a mask built
    /// with [`Flags::from_bits_retain`] round-trips through `set`/`unset`/`flip`.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Flags: u8 {
        /// Emit DEBUG-level messages.
        const DEBUG = 1 << 0;
        /// Emit ANSI color escapes.
        const USE_COLORS = 1 << 1;
        /// Colors were switched off for a file emission and must be switched back on.
        const COLOR_SUPPRESSED = 1 << 4;
        /// Debug visibility and colors.
        const ALL = Self::DEBUG.bits() | Self::USE_COLORS.bits();
    }
}

impl Default for Flags {
    fn default() -> Self {
        Self::ALL
    }
}
