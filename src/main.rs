#![no_main]
#![no_std]

use cortex_m_rt::entry;
#[cfg(feature = "defmt")]
use defmt_rtt as _;
use panic_halt as _;

use canopen_lpc1768::error::ConfigError;
use canopen_lpc1768::hw::{port, CanController, CanPort};
use canopen_lpc1768::{log_info, log_warn};

/// Build fails here when the port features are missing or conflicting.
const PORT: CanPort = match port::CONFIGURED {
    Ok(selected) => selected,
    Err(ConfigError::MissingSelector) => {
        panic!("missing CAN port selector: enable feature `can-port-0` or `can-port-1`")
    }
    Err(ConfigError::ConflictingSelectors) => {
        panic!("conflicting CAN port selectors: `can-port-0` and `can-port-1` are both enabled")
    }
    Err(ConfigError::InvalidSelector(_)) => panic!("invalid CAN port selector: must be 0 or 1"),
};

#[entry]
fn main() -> ! {
    // Peripheral handle
    let Some(can) = CanController::take(PORT) else {
        panic!("CAN controller taken twice");
    };

    // Protocol side only ever sees the gate
    let gate = can.gate();

    loop {
        let int_status = can.capture_interrupts();
        if gate.tx_interrupt(int_status) {
            log_info!("tx complete, icr={=u32:#x}", int_status);
        }

        match gate.poll_ready() {
            Ok(buf) => log_info!("tx buffer {=usize} free", buf.index() + 1),
            Err(nb::Error::WouldBlock) => log_warn!("all tx buffers busy"),
            Err(nb::Error::Other(never)) => match never {},
        }

        cortex_m::asm::delay(1_000_000);
    }
}
