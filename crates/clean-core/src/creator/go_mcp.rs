//! Go MCP tool server archetype (mark3labs/mcp-go, stdio + SSE modes)

use super::{go_module_name, render, Creator, TemplateSet};
use crate::config::ProjectConfig;

pub(crate) fn creator() -> Creator {
    Creator {
        kind: "mcp",
        stack: "go",
        install_command: "go mod tidy",
        next_steps: "make inspect",
        templates,
    }
}

fn templates(config: &ProjectConfig) -> TemplateSet {
    let module = go_module_name(config);

    let mut files = TemplateSet::new();
    for (path, body) in [
        ("go.mod", GO_MOD),
        (".gitignore", GITIGNORE),
        ("Makefile", MAKEFILE),
        ("README.md", README),
        ("cmd/server/main.go", MAIN_GO),
        ("internal/domain/entity/entity.go", ENTITY_GO),
        ("internal/domain/service/service.go", SERVICE_GO),
        ("internal/application/port/port.go", PORT_GO),
        ("internal/application/usecase/usecase.go", USECASE_GO),
        ("internal/infrastructure/mcp/presenter.go", PRESENTER_GO),
        ("internal/infrastructure/mcp/handler.go", HANDLER_GO),
        ("internal/infrastructure/mcp/server.go", SERVER_GO),
    ] {
        files.insert(
            path.to_string(),
            render(body, config).replace("{{module}}", &module),
        );
    }
    files
}

const GO_MOD: &str = r#"module {{module}}

go 1.23.0

require (
	github.com/google/uuid v1.6.0
	github.com/mark3labs/mcp-go v0.43.2
)
"#;

const GITIGNORE: &str = r#"bin/
*.exe
*.exe~
*.dll
*.so
*.dylib
*.test
*.out
go.work
go.work.sum
.idea/
.vscode/
*.swp
*.swo
.DS_Store
"#;

const MAKEFILE: &str = r#".PHONY: build run run-sse inspect clean test tidy

BINARY_NAME={{name}}
BUILD_DIR=bin
SSE_PORT=8080

build:
	@echo "Building..."
	@mkdir -p $(BUILD_DIR)
	go build -o $(BUILD_DIR)/$(BINARY_NAME) ./cmd/server

run: build
	./$(BUILD_DIR)/$(BINARY_NAME) -mode=stdio

run-sse: build
	./$(BUILD_DIR)/$(BINARY_NAME) -mode=sse -addr=:$(SSE_PORT)

inspect: build
	npx @modelcontextprotocol/inspector ./$(BUILD_DIR)/$(BINARY_NAME)

clean:
	rm -rf $(BUILD_DIR)
	go clean

test:
	go test -v ./...

tidy:
	go mod tidy

.DEFAULT_GOAL := build
"#;

const README: &str = r#"# {{name}}

{{description}}

## Architecture

```
internal/
├── domain/           # Business logic & entities
│   ├── entity/
│   └── service/
├── application/      # Use cases
│   ├── port/
│   └── usecase/
└── infrastructure/   # External interfaces
    └── mcp/
```

## Usage

```bash
make build      # Build binary
make run        # Run stdio mode
make run-sse    # Run SSE mode
make inspect    # MCP Inspector UI
```
"#;

const MAIN_GO: &str = r#"package main

import (
	"flag"
	"fmt"
	"os"

	"{{module}}/internal/application/usecase"
	"{{module}}/internal/domain/service"
	"{{module}}/internal/infrastructure/mcp"
)

func main() {
	mode := flag.String("mode", "stdio", "Server mode: stdio or sse")
	addr := flag.String("addr", ":8080", "Address for SSE server")
	flag.Parse()

	svc := service.NewService()
	uc := usecase.NewUseCase(svc)
	presenter := mcp.NewPresenter()
	handler := mcp.NewHandler(uc, presenter)
	server := mcp.NewServer(handler)

	var err error
	switch *mode {
	case "stdio":
		err = server.ServeStdio()
	case "sse":
		err = server.ServeSSE(*addr)
	default:
		fmt.Fprintf(os.Stderr, "Unknown mode: %s\n", *mode)
		os.Exit(1)
	}

	if err != nil {
		fmt.Fprintf(os.Stderr, "Error: %v\n", err)
		os.Exit(1)
	}
}
"#;

const ENTITY_GO: &str = r#"package entity

type Input struct {
	Data string
}

type Result struct {
	ID     string
	Output string
}
"#;

const SERVICE_GO: &str = r#"package service

import (
	"{{module}}/internal/domain/entity"
	"github.com/google/uuid"
)

type Service struct{}

func NewService() *Service {
	return &Service{}
}

func (s *Service) Process(input entity.Input) entity.Result {
	return entity.Result{
		ID:     uuid.New().String(),
		Output: "Processed: " + input.Data,
	}
}
"#;

const PORT_GO: &str = r#"package port

import "{{module}}/internal/domain/entity"

type ServicePort interface {
	Process(input entity.Input) entity.Result
}
"#;

const USECASE_GO: &str = r#"package usecase

import (
	"{{module}}/internal/application/port"
	"{{module}}/internal/domain/entity"
)

type UseCase struct {
	service port.ServicePort
}

func NewUseCase(svc port.ServicePort) *UseCase {
	return &UseCase{service: svc}
}

func (uc *UseCase) Execute(input entity.Input) entity.Result {
	return uc.service.Process(input)
}
"#;

const PRESENTER_GO: &str = r#"package mcp

import (
	"fmt"
	"{{module}}/internal/domain/entity"
)

type Presenter struct{}

func NewPresenter() *Presenter {
	return &Presenter{}
}

func (p *Presenter) Format(result entity.Result) string {
	return fmt.Sprintf("ID: %s\nOutput: %s", result.ID, result.Output)
}
"#;

const HANDLER_GO: &str = r#"package mcp

import (
	"context"

	"{{module}}/internal/application/usecase"
	"{{module}}/internal/domain/entity"
	"github.com/mark3labs/mcp-go/mcp"
)

type Handler struct {
	useCase   *usecase.UseCase
	presenter *Presenter
}

func NewHandler(uc *usecase.UseCase, p *Presenter) *Handler {
	return &Handler{useCase: uc, presenter: p}
}

func (h *Handler) Handle(ctx context.Context, req mcp.CallToolRequest) (*mcp.CallToolResult, error) {
	args, _ := req.Params.Arguments.(map[string]any)
	data, _ := args["data"].(string)

	input := entity.Input{Data: data}
	result := h.useCase.Execute(input)

	return mcp.NewToolResultText(h.presenter.Format(result)), nil
}
"#;

const SERVER_GO: &str = r#"package mcp

import (
	"fmt"
	"net/http"

	"github.com/mark3labs/mcp-go/mcp"
	"github.com/mark3labs/mcp-go/server"
)

type Server struct {
	mcpServer *server.MCPServer
	handler   *Handler
}

func NewServer(handler *Handler) *Server {
	s := server.NewMCPServer(
		"{{name}}",
		"1.0.0",
		server.WithToolCapabilities(true),
	)

	srv := &Server{mcpServer: s, handler: handler}
	srv.registerTools()
	return srv
}

func (s *Server) registerTools() {
	tool := mcp.NewTool("process",
		mcp.WithDescription("Process input data"),
		mcp.WithString("data",
			mcp.Description("Input data to process"),
			mcp.Required(),
		),
	)
	s.mcpServer.AddTool(tool, s.handler.Handle)
}

func (s *Server) ServeStdio() error {
	return server.ServeStdio(s.mcpServer)
}

func (s *Server) ServeSSE(addr string) error {
	sseServer := server.NewSSEServer(s.mcpServer)
	fmt.Printf("SSE Server starting on %s\n", addr)
	return http.ListenAndServe(addr, sseServer)
}
"#;
