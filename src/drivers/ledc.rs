//! LEDC PWM output for the light.
//!
//! One timer and one channel (8-bit, 1 kHz) drive the configured GPIO.
//! [`LedcPwm::acquire`] claims that channel process-wide; any second
//! acquisition, whatever its GPIO, fails with [`PinError::Busy`] until the
//! first handle is dropped.
//!
//! ## Dual-target design
//!
//! On ESP-IDF: configures and drives the LEDC peripheral via raw sys calls.
//! On host/test: holds the duty register in memory only.

use core::sync::atomic::{AtomicU8, Ordering};

use embedded_hal::pwm::{ErrorType, SetDutyCycle};
use log::{info, warn};

#[cfg(target_os = "espidf")]
use esp_idf_svc::sys::*;

use crate::app::ports::PwmPin;
use crate::error::PinError;
use crate::pins;

/// GPIO currently routed to the light channel, or [`CHANNEL_FREE`].
static CHANNEL_OWNER: AtomicU8 = AtomicU8::new(CHANNEL_FREE);
const CHANNEL_FREE: u8 = u8::MAX;

pub struct LedcPwm {
    gpio: u8,
    #[cfg(not(target_os = "espidf"))]
    duty: u8,
}

impl LedcPwm {
    /// Claim the light channel, route it to `gpio` and start at zero duty.
    pub fn acquire(gpio: u8) -> Result<Self, PinError> {
        if gpio >= pins::GPIO_COUNT {
            return Err(PinError::InvalidPin(gpio));
        }
        if let Err(owner) = CHANNEL_OWNER.compare_exchange(
            CHANNEL_FREE,
            gpio,
            Ordering::AcqRel,
            Ordering::Acquire,
        ) {
            warn!("ledc: GPIO {} refused, channel drives GPIO {}", gpio, owner);
            return Err(PinError::Busy(owner));
        }

        // Constructed before configuring so a failure releases the claim on drop.
        let pwm = Self {
            gpio,
            #[cfg(not(target_os = "espidf"))]
            duty: 0,
        };
        pwm.configure_hw()?;
        info!("ledc: GPIO {} configured as PWM output", gpio);
        Ok(pwm)
    }

    pub fn gpio(&self) -> u8 {
        self.gpio
    }

    #[cfg(target_os = "espidf")]
    fn configure_hw(&self) -> Result<(), PinError> {
        let timer = ledc_timer_config_t {
            speed_mode: ledc_mode_t_LEDC_LOW_SPEED_MODE,
            timer_num: pins::LEDC_TIMER_LIGHT,
            duty_resolution: ledc_timer_bit_t_LEDC_TIMER_8_BIT,
            freq_hz: pins::LIGHT_PWM_FREQ_HZ,
            clk_cfg: soc_periph_ledc_clk_src_legacy_t_LEDC_AUTO_CLK,
            ..Default::default()
        };
        // SAFETY: plain config struct passed by reference; the LEDC driver
        // copies it before returning.
        let ret = unsafe { ledc_timer_config(&timer) };
        if ret != ESP_OK as i32 {
            return Err(PinError::ConfigFailed(ret));
        }

        let channel = ledc_channel_config_t {
            speed_mode: ledc_mode_t_LEDC_LOW_SPEED_MODE,
            channel: pins::LEDC_CH_LIGHT,
            timer_sel: pins::LEDC_TIMER_LIGHT,
            gpio_num: i32::from(self.gpio),
            duty: 0,
            hpoint: 0,
            ..Default::default()
        };
        // SAFETY: as above.
        let ret = unsafe { ledc_channel_config(&channel) };
        if ret != ESP_OK as i32 {
            return Err(PinError::ConfigFailed(ret));
        }
        Ok(())
    }

    #[cfg(not(target_os = "espidf"))]
    fn configure_hw(&self) -> Result<(), PinError> {
        info!("ledc(sim): GPIO {} timer/channel config skipped", self.gpio);
        Ok(())
    }

    #[cfg(target_os = "espidf")]
    fn write_hw(&mut self, duty: u8) -> Result<(), PinError> {
        // SAFETY: the channel was configured in acquire(); this handle is its
        // only writer.
        let ret = unsafe {
            ledc_set_duty(
                ledc_mode_t_LEDC_LOW_SPEED_MODE,
                pins::LEDC_CH_LIGHT,
                u32::from(duty),
            )
        };
        if ret != ESP_OK as i32 {
            return Err(PinError::WriteFailed(ret));
        }
        // SAFETY: as above.
        let ret = unsafe { ledc_update_duty(ledc_mode_t_LEDC_LOW_SPEED_MODE, pins::LEDC_CH_LIGHT) };
        if ret != ESP_OK as i32 {
            return Err(PinError::WriteFailed(ret));
        }
        Ok(())
    }

    #[cfg(not(target_os = "espidf"))]
    fn write_hw(&mut self, duty: u8) -> Result<(), PinError> {
        self.duty = duty;
        Ok(())
    }

    #[cfg(target_os = "espidf")]
    fn read_hw(&self) -> Result<u8, PinError> {
        // SAFETY: read-only register access on a configured channel.
        let duty = unsafe { ledc_get_duty(ledc_mode_t_LEDC_LOW_SPEED_MODE, pins::LEDC_CH_LIGHT) };
        if duty == LEDC_ERR_DUTY {
            return Err(PinError::ReadFailed(ESP_ERR_INVALID_STATE as i32));
        }
        Ok(duty.min(u32::from(pins::DUTY_MAX)) as u8)
    }

    #[cfg(not(target_os = "espidf"))]
    fn read_hw(&self) -> Result<u8, PinError> {
        Ok(self.duty)
    }
}

impl Drop for LedcPwm {
    fn drop(&mut self) {
        #[cfg(target_os = "espidf")]
        {
            // SAFETY: stopping our own channel; idle level low keeps the light off.
            let _ = unsafe { ledc_stop(ledc_mode_t_LEDC_LOW_SPEED_MODE, pins::LEDC_CH_LIGHT, 0) };
        }
        CHANNEL_OWNER.store(CHANNEL_FREE, Ordering::Release);
    }
}

// ── embedded-hal PWM ──────────────────────────────────────────

impl ErrorType for LedcPwm {
    type Error = PinError;
}

impl SetDutyCycle for LedcPwm {
    fn max_duty_cycle(&self) -> u16 {
        u16::from(pins::DUTY_MAX)
    }

    fn set_duty_cycle(&mut self, duty: u16) -> Result<(), PinError> {
        let duty = duty.min(self.max_duty_cycle()) as u8;
        self.write_hw(duty)
    }
}

impl PwmPin for LedcPwm {
    fn duty_cycle(&self) -> Result<u16, PinError> {
        self.read_hw().map(u16::from)
    }
}
