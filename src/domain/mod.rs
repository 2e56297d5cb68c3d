// Domain layer: shipment models, the ShipConfirm document and the ports the core talks to.

pub mod document;
pub mod model;
pub mod ports;
