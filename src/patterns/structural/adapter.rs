use crate::transcript::Transcript;

// Target interface the client code expects
pub trait UsSocket {
    fn voltage(&self) -> u32;
}

pub struct AmericanSocket;

impl UsSocket for AmericanSocket {
    fn voltage(&self) -> u32 {
        120
    }
}

// Existing type with an incompatible interface
pub struct EuropeanSocket;

impl EuropeanSocket {
    pub fn volts(&self) -> u32 {
        230
    }
}

pub struct SocketAdapter {
    socket: EuropeanSocket,
}

impl SocketAdapter {
    pub fn new(socket: EuropeanSocket) -> Self {
        Self { socket }
    }
}

impl UsSocket for SocketAdapter {
    fn voltage(&self) -> u32 {
        // step down 230V to 120V
        self.socket.volts() * 120 / 230
    }
}

pub fn charge(socket: &dyn UsSocket) -> String {
    format!("Providing {} volts", socket.voltage())
}

pub fn demo(out: &mut Transcript) {
    let adapter = SocketAdapter::new(EuropeanSocket);
    out.line(charge(&adapter));
}

pub const EXPECTED: &[&str] = &["Providing 120 volts"];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_output() {
        assert_eq!(Transcript::capture(demo).lines(), EXPECTED);
    }

    #[test]
    fn test_adapter_matches_native_socket() {
        let adapted = SocketAdapter::new(EuropeanSocket);
        assert_eq!(charge(&adapted), charge(&AmericanSocket));
        assert_eq!(EuropeanSocket.volts(), 230);
    }
}
