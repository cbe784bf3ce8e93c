// src/controllers/osc.rs
// OSC control surface for the sketch

use nannou_osc as osc;
use std::error::Error;

use super::input::{Scene, SketchCommand};

pub struct OscController {
    command_queue: Vec<SketchCommand>,
    receiver: osc::Receiver,
}

impl OscController {
    pub fn new(port: u16) -> Result<Self, Box<dyn Error>> {
        let receiver = osc::receiver(port)?;

        Ok(Self {
            command_queue: Vec::new(),
            receiver,
        })
    }

    pub fn process_messages(&mut self) {
        for (packet, _addr) in self.receiver.try_iter() {
            for message in packet.into_msgs() {
                match message.addr.as_str() {
                    "/shape/tween" => {
                        if let [osc::Type::Float(x), osc::Type::Float(y), osc::Type::Float(duration)] =
                            &message.args[..]
                        {
                            self.command_queue.push(SketchCommand::StartTween {
                                x: *x,
                                y: *y,
                                duration: *duration,
                            });
                        }
                    }
                    "/shape/grow" => {
                        if let [osc::Type::Float(max_scale), osc::Type::Float(duration)] =
                            &message.args[..]
                        {
                            self.command_queue.push(SketchCommand::StartGrowth {
                                max_scale: *max_scale,
                                duration: *duration,
                            });
                        }
                    }
                    "/shape/reset" => {
                        self.command_queue.push(SketchCommand::ResetShape);
                    }
                    "/scene/select" => {
                        if let [osc::Type::Int(index)] = &message.args[..] {
                            if let Some(scene) = Scene::from_index(*index) {
                                self.command_queue
                                    .push(SketchCommand::SelectScene { scene });
                            }
                        }
                    }
                    _ => println!("Unknown OSC address pattern: {}", message.addr),
                };
            }
        }
    }

    pub fn take_commands(&mut self) -> Vec<SketchCommand> {
        std::mem::take(&mut self.command_queue)
    }
}

pub struct OscSender {
    sender: osc::Sender,
    target_addr: String,
    target_port: u16,
}

impl OscSender {
    pub fn new(target_port: u16) -> Result<Self, Box<dyn Error>> {
        let target_addr = "127.0.0.1".to_string();
        let sender = osc::sender()?;

        Ok(Self {
            sender,
            target_addr,
            target_port,
        })
    }

    pub fn send_tween(&self, x: f32, y: f32, duration: f32) {
        let addr = "/shape/tween".to_string();
        let args = vec![
            osc::Type::Float(x),
            osc::Type::Float(y),
            osc::Type::Float(duration),
        ];
        self.sender
            .send((addr, args), (self.target_addr.as_str(), self.target_port))
            .ok();
    }

    pub fn send_grow(&self, max_scale: f32, duration: f32) {
        let addr = "/shape/grow".to_string();
        let args = vec![osc::Type::Float(max_scale), osc::Type::Float(duration)];
        self.sender
            .send((addr, args), (self.target_addr.as_str(), self.target_port))
            .ok();
    }

    pub fn send_reset(&self) {
        let addr = "/shape/reset".to_string();
        let args: Vec<osc::Type> = Vec::new();
        self.sender
            .send((addr, args), (self.target_addr.as_str(), self.target_port))
            .ok();
    }

    pub fn send_select_scene(&self, scene: Scene) {
        let addr = "/scene/select".to_string();
        let args = vec![osc::Type::Int(scene.index())];
        self.sender
            .send((addr, args), (self.target_addr.as_str(), self.target_port))
            .ok();
    }
}
