//! Floating-point sticky-flag save/restore.
//!
//! The tanh approximation evaluates its polynomial on every lane, including
//! lanes holding infinities or huge values whose result is later overwritten.
//! That arithmetic can raise sticky exception flags (invalid, overflow,
//! inexact, ...) that the mathematical function would not. [`FpStatusGuard`]
//! snapshots the flags on creation and writes the snapshot back on drop:
//! flags raised in between disappear, flags the caller had already raised
//! survive.
//!
//! | target            | register | sticky bits           |
//! |-------------------|----------|-----------------------|
//! | x86 / x86_64 + SSE| MXCSR    | IE DE ZE OE UE PE     |
//! | aarch64           | FPSR     | IOC DZC OFC UFC IXC IDC |
//! | anything else     | none     | guard is a no-op      |

#[cfg(all(any(target_arch = "x86", target_arch = "x86_64"), target_feature = "sse"))]
mod imp {
    use std::{arch::asm, ptr};

    pub(super) const STICKY_MASK: u32 = 0x3f;

    #[inline]
    pub(super) fn read() -> u32 {
        let mut mxcsr = 0u32;
        unsafe {
            asm!(
                "stmxcsr [{}]",
                in(reg) ptr::addr_of_mut!(mxcsr),
                options(nostack, preserves_flags)
            )
        };
        mxcsr
    }

    #[inline]
    pub(super) fn write(value: u32) {
        unsafe {
            asm!(
                "ldmxcsr [{}]",
                in(reg) ptr::addr_of!(value),
                options(nostack, readonly, preserves_flags)
            )
        };
    }
}

#[cfg(target_arch = "aarch64")]
mod imp {
    use std::arch::asm;

    pub(super) const STICKY_MASK: u32 = 0x9f;

    #[inline]
    pub(super) fn read() -> u32 {
        let fpsr: u64;
        unsafe { asm!("mrs {}, fpsr", out(reg) fpsr, options(nomem, nostack, preserves_flags)) };
        fpsr as u32
    }

    #[inline]
    pub(super) fn write(value: u32) {
        let fpsr = value as u64;
        unsafe { asm!("msr fpsr, {}", in(reg) fpsr, options(nomem, nostack, preserves_flags)) };
    }
}

#[cfg(not(any(
    all(any(target_arch = "x86", target_arch = "x86_64"), target_feature = "sse"),
    target_arch = "aarch64"
)))]
mod imp {
    pub(super) const STICKY_MASK: u32 = 0;

    #[inline]
    pub(super) fn read() -> u32 {
        0
    }

    #[inline]
    pub(super) fn write(_value: u32) {}
}

/// Sticky exception flags currently raised on this thread, in the target's
/// native bit layout. Always zero on targets without a supported status
/// register.
#[inline]
pub fn raised_flags() -> u32 {
    imp::read() & imp::STICKY_MASK
}

/// Restores the sticky exception flags captured at construction when dropped.
///
/// Only the sticky bits are restored; rounding mode and exception masks that
/// share the register are left as they are at drop time.
#[derive(Debug)]
#[must_use = "flags are restored when the guard is dropped"]
pub struct FpStatusGuard {
    saved: u32,
}

impl FpStatusGuard {
    #[inline]
    pub fn new() -> Self {
        Self {
            saved: raised_flags(),
        }
    }
}

impl Default for FpStatusGuard {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for FpStatusGuard {
    #[inline]
    fn drop(&mut self) {
        let current = imp::read();
        let sticky = current & imp::STICKY_MASK;
        if sticky != self.saved {
            imp::write((current & !imp::STICKY_MASK) | self.saved);
        }
    }
}
