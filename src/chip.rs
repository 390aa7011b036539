/// ESP32-S2 silicon facts shared by every board variant.
///
/// Values follow the ESP32-S2 datasheet and the IDF `soc_caps.h`: GPIO0-21
/// and GPIO26-46 are bonded out (22-25 do not exist), GPIO46 is input-only,
/// ADC1 channels 0-9 sit on GPIO1-10 and ADC2 channels 0-9 on GPIO11-20.
use crate::pin::{GpioNum, NOT_CONNECTED};

/// Number of GPIO slots in the pad matrix (GPIO0..=GPIO46).
pub const SOC_GPIO_PIN_COUNT: u8 = 47;

/// Digital pin numbers the Arduino core accepts.
pub const NUM_DIGITAL_PINS: u8 = 48;

/// ADC channels across ADC1 and ADC2.
pub const NUM_ANALOG_INPUTS: u8 = 20;

/// Interrupt-capable external pins.
pub const EXTERNAL_NUM_INTERRUPTS: u8 = 46;

/// Pins below this number can drive an LEDC (PWM) channel.
pub const PWM_PIN_LIMIT: u8 = 46;

/// ADC channel index to GPIO number (`esp32_adc2gpio`).
pub const ADC_TO_GPIO: [GpioNum; NUM_ANALOG_INPUTS as usize] = [
    1, 2, 3, 4, 5, 6, 7, 8, 9, 10, // ADC1_CH0..CH9
    11, 12, 13, 14, 15, 16, 17, 18, 19, 20, // ADC2_CH0..CH9
];

/// GPIOs with a DAC output (DAC1, DAC2).
pub const DAC_GPIOS: [u8; 2] = [17, 18];

/// Only input buffer, no output driver.
pub const INPUT_ONLY_GPIOS: [u8; 1] = [46];

/// True if `gpio` exists on the ESP32-S2 package.
pub const fn is_valid_gpio(gpio: u8) -> bool {
    matches!(gpio, 0..=21 | 26..=46)
}

/// True if `gpio` exists and has an output driver.
pub const fn is_output_capable(gpio: u8) -> bool {
    if !is_valid_gpio(gpio) {
        return false;
    }
    let mut i = 0;
    while i < INPUT_ONLY_GPIOS.len() {
        if INPUT_ONLY_GPIOS[i] == gpio {
            return false;
        }
        i += 1;
    }
    true
}

/// True if `gpio` is wired to a DAC channel.
pub const fn has_dac(gpio: u8) -> bool {
    gpio == DAC_GPIOS[0] || gpio == DAC_GPIOS[1]
}

/// ADC channel index for `gpio`, if it has one.
pub fn adc_channel(gpio: u8) -> Option<u8> {
    ADC_TO_GPIO
        .iter()
        .position(|&g| g == gpio as GpioNum)
        .map(|ch| ch as u8)
}

/// Range-checked ADC lookup against an explicit channel count.
pub const fn adc_channel_to_gpio(channel: u8, num_analog_inputs: u8) -> GpioNum {
    if channel < num_analog_inputs && (channel as usize) < ADC_TO_GPIO.len() {
        ADC_TO_GPIO[channel as usize]
    } else {
        NOT_CONNECTED
    }
}

/// Identity for digital pins below `num_digital_pins`, sentinel above.
pub const fn pin_to_interrupt(pin: u8, num_digital_pins: u8) -> GpioNum {
    if pin < num_digital_pins {
        pin as GpioNum
    } else {
        NOT_CONNECTED
    }
}
